use clap::ArgMatches;
use std::process;
use tickline::metadata::SeriesSummary;
use tickline::option::{
    cli_app, CliOpts, ABOVE_ARG, ADD_CMD, AFTER_ARG, BEFORE_ARG, BELOW_ARG, DATE_ARG, DROP_ARG,
    FILTER_CMD, GREATEST_CMD, INCREMENTS_ON_CMD, OUTPUT_ARG, PRICES_ON_CMD, PRICE_ARG,
    PRICE_AT_CMD, SUMMARY_CMD,
};
use tickline::{Result, TicklineErr, TimeSeries};

#[macro_use]
extern crate log;

///
/// Binary command line wrapper for the library
/// args:
/// file, the two column series file
/// delimiter, -d, default value `,`, the field separator
/// config, -c, optional yaml file with `delimiter` and `name`
///
fn main() {
    env_logger::init();

    let matches = cli_app().get_matches();
    if let Err(e) = run(&matches) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let options = CliOpts::get_config(matches)?;
    let mut series = options.load_series()?;
    info!(
        "loaded {} observations of {:?} from {}",
        series.count(),
        series.name(),
        options.file().display()
    );

    match matches.subcommand() {
        (SUMMARY_CMD, Some(_)) => {
            print!("{}", serde_yaml::to_string(&SeriesSummary::from(&series))?);
        }
        (PRICES_ON_CMD, Some(sub)) => {
            print!("{}", series.prices_on_date(required(sub, DATE_ARG)?)?);
        }
        (INCREMENTS_ON_CMD, Some(sub)) => {
            print!("{}", series.increments_on_date(required(sub, DATE_ARG)?)?);
        }
        (PRICE_AT_CMD, Some(sub)) => {
            println!("{:.5}", series.price_at(required(sub, DATE_ARG)?)?);
        }
        (GREATEST_CMD, Some(_)) => {
            let increment = series.greatest_increment()?;
            println!("{}\t{:.5}", increment.at, increment.value);
        }
        (FILTER_CMD, Some(sub)) => {
            apply_filters(&mut series, sub)?;
            series.save(required(sub, OUTPUT_ARG)?)?;
        }
        (ADD_CMD, Some(sub)) => {
            let price = parse_price(required(sub, PRICE_ARG)?)?;
            series.insert(required(sub, DATE_ARG)?, price)?;
            series.save(required(sub, OUTPUT_ARG)?)?;
        }
        (name, _) => {
            return Err(TicklineErr::OptionErr(format!("unknown command {:?}", name)));
        }
    }
    Ok(())
}

/// Date filters reject invalid text here, where the library would silently do nothing.
fn apply_filters(series: &mut TimeSeries, sub: &ArgMatches) -> Result<()> {
    if let Some(date) = sub.value_of(BEFORE_ARG) {
        tickline::codec::parse_to_epoch(date)?;
        series.remove_before(date);
    }
    if let Some(date) = sub.value_of(AFTER_ARG) {
        tickline::codec::parse_to_epoch(date)?;
        series.remove_after(date);
    }
    if let Some(price) = sub.value_of(ABOVE_ARG) {
        series.remove_greater_than(parse_price(price)?);
    }
    if let Some(price) = sub.value_of(BELOW_ARG) {
        series.remove_less_than(parse_price(price)?);
    }
    if let Some(times) = sub.values_of(DROP_ARG) {
        for time in times {
            if !series.remove_at(time) {
                warn!("no observation at {}", time);
            }
        }
    }
    debug!("{} observations left after filtering", series.count());
    Ok(())
}

fn required<'a>(sub: &'a ArgMatches, name: &str) -> Result<&'a str> {
    sub.value_of(name)
        .ok_or_else(|| TicklineErr::OptionErr(format!("missing argument {}", name)))
}

fn parse_price(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|e| TicklineErr::OptionErr(format!("price {:?}: {}", text, e)))
}
