pub mod documents;
pub mod drafts;
pub mod session;
