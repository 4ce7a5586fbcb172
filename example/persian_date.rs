use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use persia::{PersianDate, is_leap_year};
use std::process;

/// Convert between Gregorian and Persian dates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Year (Gregorian unless --persian is given)
    year: i32,

    /// Month, 1-12
    month: u8,

    /// Day of month
    day: u8,

    /// Treat the input as a Persian date and print the Gregorian equivalent
    #[arg(short, long)]
    persian: bool,

    /// Time of day as HOUR MINUTE
    #[arg(short, long, num_args = 2, value_names = ["HOUR", "MINUTE"])]
    time: Option<Vec<u32>>,

    /// Also print the current week and month
    #[arg(short = 'n', long)]
    navigation: bool,
}

fn main() {
    let args = Args::parse();

    let time = match args.time.as_deref() {
        Some([hour, minute]) => match NaiveTime::from_hms_opt(*hour, *minute, 0) {
            Some(time) => time,
            None => {
                eprintln!("Invalid time: {hour:02}:{minute:02}");
                process::exit(1);
            }
        },
        _ => NaiveTime::default(),
    };

    let date = if args.persian {
        match PersianDate::with_time(args.year, args.month, args.day, time) {
            Ok(date) => date,
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        }
    } else {
        match NaiveDate::from_ymd_opt(args.year, u32::from(args.month), u32::from(args.day)) {
            Some(date) => PersianDate::from(date.and_time(time)),
            None => {
                eprintln!(
                    "Invalid Gregorian date: {}-{:02}-{:02}",
                    args.year, args.month, args.day
                );
                process::exit(1);
            }
        }
    };

    println!("Gregorian:    {}", date.to_naive_date_time());
    println!("Persian:      {date}");
    println!("{}", "=".repeat(60));
    println!("Short:        {}", date.to_short_persian_string());
    println!("Worded:       {}", date.to_persian_string());
    println!("Long:         {}", date.to_long_persian_string(args.time.is_some()));
    println!("Day & month:  {}", date.to_persian_day_month_string());
    println!("Weekday:      {}", date.to_persian_weekday_string());
    println!("Ordinal:      {}", date.to_long_persian_ordinal_words());
    println!();
    println!(
        "Day {} of {} ({} remaining){}",
        date.day_of_year(),
        date.year(),
        date.days_remaining_in_year(),
        if is_leap_year(date.year()) { ", leap year" } else { "" }
    );

    if args.navigation {
        println!();
        println!("Week:");
        for day in date.current_week() {
            println!("  {}  {}", day, day.weekday_name());
        }
        println!("Month ({}):", date.month_name());
        for week in date.current_month().chunks(7) {
            let line: Vec<String> = week.iter().map(|d| format!("{:>2}", d.day())).collect();
            println!("  {}", line.join(" "));
        }
    }
}
