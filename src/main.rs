use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paymethod::PaymentMethodFactory;
use paymethod::logging::init_cli_logger;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment method code (1 = cash, 2 = debit card)
    #[arg(allow_negative_numbers = true)]
    code: i64,

    /// Amount to pay
    #[arg(allow_negative_numbers = true)]
    amount: f64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let method = PaymentMethodFactory::create(cli.code).into_diagnostic()?;
    println!("{}", method.pay(cli.amount));

    Ok(())
}
