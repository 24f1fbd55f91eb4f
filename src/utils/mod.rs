mod time;

#[cfg(test)]
mod tests;

pub use time::current_time_millis;
