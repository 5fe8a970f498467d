use busca_cep::formatter::format_cep_data;
use busca_cep::network::CepFetcher;
use busca_cep::ui::{cli::Args, output};
use clap::Parser;
use std::process;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let args = Args::parse();
    init_tracing();

    if !args.json {
        output::print_searching(&args.cep);
    }

    let fetcher = CepFetcher::new(args.fetcher_config());
    let record = match smol::block_on(fetcher.fetch_cep_data(&args.cep)) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = ?e, "Lookup failed");
            output::print_error(&e);
            process::exit(1);
        }
    };

    let formatted = format_cep_data(&record);

    if args.json {
        if let Err(e) = output::print_json(&formatted) {
            eprintln!("Failed to serialize the result as JSON. Detailed error: \n{}", e);
            process::exit(1);
        }
    } else {
        output::print_results(&formatted);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
