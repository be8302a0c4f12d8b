pub mod contact_parser;
pub mod degrees;
pub mod line_parser;
pub mod medals;
pub mod rodne_cislo;
