use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic;
use resenaqr::qr::PngQrEncoder;
use resenaqr::store::{DiscardStore, RestLeadStore};
use resenaqr::{DOWNLOAD_FILENAME, LeadForm, QR_WIDTH, deep_link, error};
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generador de QR para reseñas por WhatsApp")]
struct Args {
    /// WhatsApp number with country code (e.g. 521234567890)
    #[arg(short, long, default_value = "")]
    phone: String,

    /// Review link (e.g. https://g.page/tu-negocio)
    #[arg(short, long, default_value = "")]
    review_url: String,

    /// Hosted backend base URL (e.g. https://xyz.supabase.co)
    #[arg(long)]
    store_url: Option<Url>,

    /// Hosted backend API key
    #[arg(long)]
    store_key: Option<String>,

    /// Where to write the PNG
    #[arg(short, long, default_value = DOWNLOAD_FILENAME)]
    out: PathBuf,

    /// Pixel width of the generated QR
    #[arg(long, default_value_t = QR_WIDTH)]
    width: u32,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let persisting = args.store_url.is_some() && args.store_key.is_some();

    let mut form = LeadForm::new();
    form.set_phone(args.phone);
    form.set_review_url(args.review_url);
    form.set_qr_width(args.width);

    match (args.store_url, args.store_key) {
        (Some(base_url), Some(api_key)) => {
            let store = RestLeadStore::new()
                .client(reqwest::Client::new())
                .base_url(base_url)
                .api_key(api_key)
                .build();
            form.submit(&PngQrEncoder, &store).await;
        }
        _ => {
            tracing::warn!("no backend credentials given, the lead will not be saved");
            form.submit(&PngQrEncoder, &DiscardStore).await;
        }
    }

    match form.qr() {
        Some(qr) => {
            // A persistence failure is reported but never discards the QR.
            if let Some(err) = form.error() {
                eprintln!("advertencia: {}", err.user_message());
            }
            std::fs::write(&args.out, &qr.bytes).into_diagnostic()?;
            println!("¡Tu QR está listo! ({} px)", qr.width);
            println!("archivo: {}", args.out.display());
            println!(
                "enlace: {}",
                deep_link(form.phone(), form.review_url())
            );
            if persisting && form.saved() {
                println!("¡Guardado exitosamente!");
            }
            Ok(())
        }
        None => {
            let message = form
                .error()
                .map(|e| e.user_message())
                .unwrap_or_else(|| error::GENERIC_ERROR.to_string());
            Err(miette::miette!("{message}"))
        }
    }
}
