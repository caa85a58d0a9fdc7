use mesonet::{read_file, Config, DayStatistics, DaysStatistics};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> miette::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mesonet=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let files: Vec<String> = std::env::args().skip(1).collect();
    if files.is_empty() {
        miette::bail!("usage: summary <file.mts>...");
    }

    let config = Config::default();
    let mut days = DaysStatistics::with_config(&files, config.clone());
    for path in &files {
        let file = read_file(path, &config)?;
        let day = DayStatistics::with_config(file.records(), &config)?;
        println!("{day}\n");
        days.fold(&day);
    }

    println!("{days}");
    print!("{}", days.combine_min_max_statistics("tair")?);

    Ok(())
}
