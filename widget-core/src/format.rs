//! Pure formatters turning snapshot fields into the sentences the widget shows.

use crate::{clock::Clock, model::CELSIUS};

/// Commentary on the temperature, banded for Celsius.
///
/// Other units have no commentary and come back as `"{temperature}°{unit}"`.
pub fn temperature_message(temperature: f64, unit: &str) -> String {
    let t = display_number(temperature);

    if unit != CELSIUS {
        return format!("{t}°{unit}");
    }

    if temperature < 0.0 {
        format!("The temperature is {t}°C. Brrr, it's freezing!")
    } else if temperature < 10.0 {
        format!("The temperature is {t}°C. It's pretty cold!.")
    } else if temperature < 20.0 {
        format!("The temperature is {t}°C. It's a bit cool.")
    } else if temperature < 30.0 {
        format!("The temperature is {t}°C. Perfect Weather!.")
    } else {
        format!("It's hot at {t}°C. Stay hydrated!")
    }
}

/// Fixed sentence for a known condition, or the description unchanged.
pub fn weather_message(description: &str) -> String {
    let sentence = match description.to_lowercase().as_str() {
        "sunny" => "It's a beautiful sunny day!",
        "partly cloudy" => "A bit of cloud cover, but still a great day!",
        "cloudy" => "It's a cloudy today!",
        "overcast" => "It's a bit gloomy today.",
        "rain" => "It's raining today. Better grab an umbrella!",
        "thunderstorm" => "There's a thunderstorm today. Stay safe!",
        "snow" => "It's snowing today. Time to get cozy!",
        "mist" => "It's a bit misty today. Better grab a scarf!",
        "fog" => "It's foggy today. Better slow down!",
        _ => return description.to_string(),
    };

    sentence.to_string()
}

/// `"{location} at Night"` for hours 18-23 and 0-5, `"{location} During the Day"` otherwise.
pub fn location_message(location: &str, hour: u32) -> String {
    let suffix = if is_night(hour) { "at Night" } else { "During the Day" };
    format!("{location} {suffix}")
}

pub fn location_message_now(location: &str, clock: &dyn Clock) -> String {
    location_message(location, clock.local_hour())
}

fn is_night(hour: u32) -> bool {
    hour >= 18 || hour < 6
}

/// Integral values print without a fractional part; negative zero prints as `0`.
fn display_number(value: f64) -> String {
    if value == 0.0 { "0".to_string() } else { value.to_string() }
}
