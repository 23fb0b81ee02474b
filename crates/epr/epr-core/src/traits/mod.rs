mod validator;

pub use validator::ICompositionValidator;
