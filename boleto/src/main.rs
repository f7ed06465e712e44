use boletolib::convert::{decode, encode, inspect};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutFmt {
    /// Линия для набора с пунктуацией
    Line,
    /// 44 цифры штрих-кода
    Barcode,
    /// Расшифрованная сводка
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "boleto", version, about = "Преобразование кодов платёжных квитанций (boleto)")]
struct Cli {
    /// Код: 44 цифры штрих-кода или 47 цифр линии (по умолчанию stdin)
    code: Option<String>,

    /// Формат выхода
    #[arg(long = "out-format", value_enum, default_value = "line")]
    out_format: OutFmt,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let input = match cli.code {
        Some(code) => code,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let input = input.trim();

    let mismatch = match cli.out_format {
        OutFmt::Line => {
            // Нормализуем любую форму до штрих-кода, затем кодируем линию.
            let dec = decode(input)?;
            let enc = encode(&dec.barcode)?;
            println!("{}", enc.display);
            enc.checksum_mismatch
        }
        OutFmt::Barcode => {
            let dec = decode(input)?;
            println!("{}", dec.barcode);
            dec.checksum_mismatch
        }
        OutFmt::Json => {
            let summary = inspect(input)?;
            let mismatch = summary.checksum_mismatch;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            mismatch
        }
    };

    if mismatch {
        eprintln!("предупреждение: общий контрольный разряд не совпадает с пересчитанным");
    }
    Ok(())
}
