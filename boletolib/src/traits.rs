//! Унифицированные трэйты разбора/записи текстовых форм кода.

use crate::{error::Result, model::Boleto};

pub trait ParseFormat {
    fn parse(s: &str) -> Result<Boleto>;
}

pub trait RenderFormat {
    fn render(b: &Boleto) -> String;
}

pub trait Format: ParseFormat + RenderFormat {}
impl<T: ParseFormat + RenderFormat> Format for T {}
