use chrono::{Duration, NaiveDate};
use price_forecast::data::TimeSeries;
use price_forecast::format::format_price;
use price_forecast::trend::TrendFitter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Price Forecast: Trend Line Example");
    println!("==================================\n");

    let series = create_sample_closes();
    println!("Sample data created: {} daily closes\n", series.len());

    // Degree-3 trend line, the default the charting dashboard uses
    let fitter = TrendFitter::new(3);
    let model = fitter.fit(&series)?;
    println!("Fitted a degree {} trend line\n", model.degree());

    println!("{:>12} {:>12} {:>12}", "date", "close", "trend");
    for point in series.points().iter().step_by(20) {
        println!(
            "{:>12} {:>12} {:>12}",
            point.timestamp,
            format_price(point.value),
            format_price(model.evaluate(point.timestamp))
        );
    }

    // Read the trend a week past the end of the data. Extrapolation
    // accuracy is not guaranteed.
    let last = series
        .last()
        .ok_or("series is empty")?
        .timestamp;
    let next_week = last + Duration::days(7);
    println!(
        "\nTrend projected to {}: {}",
        next_week,
        format_price(model.evaluate(next_week))
    );

    Ok(())
}

/// Create 180 days of drifting sample closes with a mild cycle
fn create_sample_closes() -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).expect("valid date");
    let mut dates = Vec::with_capacity(180);
    let mut closes = Vec::with_capacity(180);

    let mut price = 100.0;
    for i in 0..180 {
        dates.push(start + Duration::days(i));

        let drift = 0.08;
        let cycle = (i as f64 * 0.12).sin() * 1.5;
        price = price + drift + cycle * 0.1;
        closes.push(price);
    }

    TimeSeries::from_parts(dates, closes).expect("sample data is sorted")
}
