use boletolib::convert::encode;
use std::io::BufRead;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: читаем сканы (по 44 цифры на строку) из stdin, печатаем линии.
    for scanned in std::io::stdin().lock().lines() {
        let enc = encode(scanned?.trim())?;
        println!("{}", enc.display);
    }
    Ok(())
}
