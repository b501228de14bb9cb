mod ptkp;
mod tax_bracket;
mod taxpayer_status;

pub use ptkp::PtkpTable;
pub use tax_bracket::TaxBracket;
pub use taxpayer_status::TaxpayerStatus;
