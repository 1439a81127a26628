mod resolve_symptoms;

pub use resolve_symptoms::ResolveSymptomsUseCase;
