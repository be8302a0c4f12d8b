pub mod batch_import;
pub mod contact_import;

pub use batch_import::BatchImporter;
pub use contact_import::ContactImporter;
