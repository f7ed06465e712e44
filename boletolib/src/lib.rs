//! boletolib — библиотека для работы с кодами бразильских платёжных квитанций (boleto):
//! штрих-код (44 цифры) и «линия для набора» (47 цифр).

pub mod checksum;
pub mod convert;
pub mod error;
pub mod model;
pub mod scan;
pub mod traits;

pub mod formats {
    pub mod barcode;
    pub mod line;
}
