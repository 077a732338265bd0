// Attribute tagging — maps product descriptions onto the catalog taxonomy.

pub mod extractor;
pub mod traits;
pub mod vocabulary;
