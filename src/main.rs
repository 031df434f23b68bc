use remito_pdf::{generator_from_env, PdfError, Remito};
use std::env;
use std::fs;

/// A simple CLI to render a remito JSON record to a PDF file.
fn main() -> Result<(), PdfError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Renders a remito record to a government-compliant delivery note.");
        eprintln!();
        eprintln!("Usage: {} <path/to/remito.json> <path/to/output.pdf>", args[0]);
        eprintln!();
        eprintln!("Set PDF_SERVICE_URL to render through the remote service,");
        eprintln!("REMITO_AFM_DIR to point at the AFM metric files, and");
        eprintln!("EMPRESA_* variables to override the issuer profile.");
        std::process::exit(1);
    }

    let data = fs::read_to_string(&args[1])?;
    let remito: Remito = serde_json::from_str(&data)?;

    let generator = generator_from_env();
    let bytes = generator.generate(&remito)?;

    fs::write(&args[2], &bytes)?;
    println!("Wrote {} ({} bytes)", args[2], bytes.len());
    Ok(())
}
