use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct LiteratureParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct TrialsParams {
    #[serde(default)]
    pub condition: String,
}
