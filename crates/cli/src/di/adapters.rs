use medref_application::ports::{
    ConsumerHealthSource, ListBackupRepository, ListProvider, LiteratureSource, PhenotypeSource,
    TrialRegistry,
};
use medref_domain::config::ProvidersConfig;
use medref_infrastructure::providers::{
    ClinicalTrialsGovClient, EuropePmcClient, HpoAnnotationClient, MedlinePlusConnectClient,
    OlsDiseaseOntologyClient, PubMedClient, RoutedListProvider, RxNavDrugClient,
};
use medref_infrastructure::repositories::SqliteListBackupRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Concrete implementations behind every application port.
pub struct Adapters {
    pub list_provider: Arc<dyn ListProvider>,
    pub backup: Arc<dyn ListBackupRepository>,
    pub consumer_health: Arc<dyn ConsumerHealthSource>,
    pub phenotype: Arc<dyn PhenotypeSource>,
    /// Tried in order: PubMed, then Europe PMC.
    pub literature: Vec<Arc<dyn LiteratureSource>>,
    pub trial_registries: Vec<Arc<dyn TrialRegistry>>,
}

impl Adapters {
    pub fn new(config: &ProvidersConfig, pool: SqlitePool) -> Self {
        let list_provider = RoutedListProvider::new()
            .with_drugs(Arc::new(RxNavDrugClient::from_config(config)))
            .with_diseases(Arc::new(OlsDiseaseOntologyClient::from_config(config)));

        Self {
            list_provider: Arc::new(list_provider),
            backup: Arc::new(SqliteListBackupRepository::new(pool)),
            consumer_health: Arc::new(MedlinePlusConnectClient::from_config(config)),
            phenotype: Arc::new(HpoAnnotationClient::from_config(config)),
            literature: vec![
                Arc::new(PubMedClient::from_config(config)),
                Arc::new(EuropePmcClient::from_config(config)),
            ],
            trial_registries: vec![Arc::new(ClinicalTrialsGovClient::from_config(config))],
        }
    }
}
