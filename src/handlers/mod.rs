pub mod timezones;
