use clap::{Parser, Subcommand, ValueEnum};
use rust_qr_encode::symbology::row_strings;
use rust_qr_encode::{
    Code39, Code128, ECLevel, EncodeOptions, Ean8, Ean13, Layout, LayoutOptions, MaskPattern,
    Mode, Symbology, TextEncoding, encode_with,
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR and linear barcode encoder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text as a QR code and print its modules
    Encode {
        data: String,
        /// Error correction level (L, M, Q, H); defaults to QR_EC_LEVEL, then L
        #[arg(long)]
        level: Option<ECLevel>,
        /// Version 1-40; 0 picks the smallest that fits
        #[arg(long, default_value_t = 0)]
        version: u8,
        /// numeric, alphanumeric, byte or kanji
        #[arg(long)]
        mode: Option<Mode>,
        /// Mask 0-7; omitted to pick the lowest penalty
        #[arg(long)]
        mask: Option<u8>,
        /// Byte mode text encoding (latin1, utf-8); defaults to QR_TEXT_ENCODING, then latin1
        #[arg(long)]
        encoding: Option<TextEncoding>,
        /// Draw with terminal blocks instead of 0/1 rows
        #[arg(long)]
        blocks: bool,
    },
    /// Encode data in a linear symbology and print its bar pattern
    Linear {
        #[arg(value_enum)]
        symbology: LinearKind,
        data: String,
        #[arg(long)]
        blocks: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LinearKind {
    Code39,
    Code128,
    Ean8,
    Ean13,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Encode {
            data,
            level,
            version,
            mode,
            mask,
            encoding,
            blocks,
        } => encode_cmd(&data, level, version, mode, mask, encoding, blocks),
        Command::Linear {
            symbology,
            data,
            blocks,
        } => linear_cmd(symbology, &data, blocks),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn encode_cmd(
    data: &str,
    level: Option<ECLevel>,
    version: u8,
    mode: Option<Mode>,
    mask: Option<u8>,
    encoding: Option<TextEncoding>,
    blocks: bool,
) -> rust_qr_encode::Result<()> {
    let mut options = EncodeOptions::from_env().with_version_number(version)?;
    if let Some(level) = level {
        options = options.with_ec_level(level);
    }
    if let Some(mode) = mode {
        options = options.with_mode(mode);
    }
    if let Some(mask) = mask {
        options = options.with_mask(MaskPattern::from_id(mask)?);
    }
    if let Some(encoding) = encoding {
        options = options.with_text_encoding(encoding);
    }

    let qr = encode_with(data, &options)?;
    println!(
        "Version {} ({}x{}), level {}, {} mode, mask {}",
        qr.version,
        qr.size(),
        qr.size(),
        qr.error_correction,
        qr.mode,
        qr.mask_pattern.id()
    );
    print_symbol(&qr, blocks);
    Ok(())
}

fn linear_cmd(kind: LinearKind, data: &str, blocks: bool) -> rust_qr_encode::Result<()> {
    let symbol: Box<dyn Symbology> = match kind {
        LinearKind::Code39 => Box::new(Code39::new(data)?),
        LinearKind::Code128 => Box::new(Code128::new(data)?),
        LinearKind::Ean8 => Box::new(Ean8::new(data)?),
        LinearKind::Ean13 => Box::new(Ean13::new(data)?),
    };
    print_symbol(symbol.as_ref(), blocks);
    Ok(())
}

fn print_symbol(symbol: &dyn Symbology, blocks: bool) {
    let rows = symbol.row_patterns();
    if !blocks {
        for row in row_strings(&rows) {
            println!("{}", row);
        }
        return;
    }

    // Dark modules as blocks on a light quiet zone, two columns per module
    let layout = Layout::new(symbol, &LayoutOptions::new());
    let light_row = "  ".repeat(layout.unscaled_width());
    for _ in 0..layout.quiet_zone_y() {
        println!("{}", light_row);
    }
    let margin = "  ".repeat(layout.quiet_zone_x());
    for row in &rows {
        let line: String = row
            .iter()
            .map(|&dark| if dark { "\u{2588}\u{2588}" } else { "  " })
            .collect();
        println!("{}{}{}", margin, line, margin);
    }
    for _ in 0..layout.quiet_zone_y() {
        println!("{}", light_row);
    }
}
