use chrono::{Duration, NaiveDate};
use price_forecast::data::TimeSeries;
use price_forecast::forecast::{Direction, Forecaster};
use price_forecast::format::{format_percent, format_price};
use price_forecast::models::holt::HoltLinear;
use price_forecast::provider::{CsvProvider, HistoryRange, MarketDataProvider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Price Forecast: Close Price Forecast Example");
    println!("============================================\n");

    // With a directory and symbol on the command line, read a local CSV
    // export; otherwise fall back to generated sample data.
    let mut args = std::env::args().skip(1);
    let series = match (args.next(), args.next()) {
        (Some(dir), Some(symbol)) => {
            let provider = CsvProvider::new(dir);
            let series = provider.history(&symbol, HistoryRange::OneYear)?;
            println!("Loaded {} closes for {}\n", series.len(), symbol);
            series
        }
        _ => {
            let series = create_sample_closes();
            println!("Sample data created: {} daily closes\n", series.len());
            series
        }
    };

    let model = HoltLinear::new(0.6, 0.2)?;
    let forecast = Forecaster::forecast(&series, 7, &model)?;

    println!("Forecast for the next 7 days:");
    for (timestamp, value) in forecast.timestamps().iter().zip(forecast.values()) {
        println!("  {}  {}", timestamp, format_price(*value));
    }

    let comparison = Forecaster::compare(&series, &forecast)?;
    let change =
        (comparison.predicted_next - comparison.latest_observed) / comparison.latest_observed;

    println!("\nToday's close price: {}", format_price(comparison.latest_observed));
    println!(
        "Predicted close at the end of the window: {} ({})",
        format_price(comparison.predicted_next),
        format_percent(change)
    );

    match comparison.direction {
        Direction::Higher => println!("Prediction: the close price will be higher."),
        Direction::LowerOrEqual => {
            println!("Prediction: the close price will be lower or the same.")
        }
    }

    Ok(())
}

/// Create 120 days of gently rising sample closes
fn create_sample_closes() -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid date");
    let mut dates = Vec::with_capacity(120);
    let mut closes = Vec::with_capacity(120);

    let mut price = 250.0;
    for i in 0..120 {
        dates.push(start + Duration::days(i));

        let drift = 0.35;
        let wobble = (i as f64 * 0.4).cos() * 0.8;
        price = price + drift + wobble;
        closes.push(price);
    }

    TimeSeries::from_parts(dates, closes).expect("sample data is sorted")
}
