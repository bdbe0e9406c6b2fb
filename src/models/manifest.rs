use once_cell::sync::Lazy;

use crate::models::timezone::TimezoneDescriptor;

// (identifier, label, offset in hours, region, abbreviation)
// Current standard offsets only, maintained by hand. No DST rules.
const ENTRIES: &[(&str, &str, f64, &str, &str)] = &[
    // Universal
    ("Etc/UTC", "Coordinated Universal Time (UTC+0)", 0.0, "Universal", "UTC"),
    ("Etc/GMT", "Greenwich Mean Time (UTC+0)", 0.0, "Universal", "GMT"),
    // Pacific
    ("Pacific/Midway", "Midway Island (UTC-11)", -11.0, "Pacific", "SST"),
    ("Pacific/Pago_Pago", "American Samoa (UTC-11)", -11.0, "Pacific", "SST"),
    ("Pacific/Honolulu", "Hawaii (UTC-10)", -10.0, "Pacific", "HST"),
    ("Pacific/Marquesas", "Marquesas Islands (UTC-9:30)", -9.5, "Pacific", "MART"),
    ("Pacific/Gambier", "Gambier Islands (UTC-9)", -9.0, "Pacific", "GAMT"),
    ("Pacific/Pitcairn", "Pitcairn Islands (UTC-8)", -8.0, "Pacific", "PST"),
    ("Pacific/Guam", "Guam (UTC+10)", 10.0, "Pacific", "ChST"),
    ("Pacific/Port_Moresby", "Papua New Guinea (UTC+10)", 10.0, "Pacific", "PGT"),
    ("Pacific/Noumea", "New Caledonia (UTC+11)", 11.0, "Pacific", "NCT"),
    ("Pacific/Norfolk", "Norfolk Island (UTC+11)", 11.0, "Pacific", "NFT"),
    ("Pacific/Fiji", "Fiji (UTC+12)", 12.0, "Pacific", "FJT"),
    ("Pacific/Chatham", "Chatham Islands (UTC+12:45)", 12.75, "Pacific", "CHAST"),
    ("Pacific/Tongatapu", "Tonga (UTC+13)", 13.0, "Pacific", "TOT"),
    ("Pacific/Apia", "Samoa (UTC+13)", 13.0, "Pacific", "WST"),
    ("Pacific/Kiritimati", "Line Islands (UTC+14)", 14.0, "Pacific", "LINT"),
    // Americas
    ("America/Anchorage", "Alaska (UTC-9)", -9.0, "Americas", "AKST"),
    ("America/Los_Angeles", "Pacific Time - US & Canada (UTC-8)", -8.0, "Americas", "PST"),
    ("America/Tijuana", "Baja California (UTC-8)", -8.0, "Americas", "PST"),
    ("America/Vancouver", "Vancouver (UTC-8)", -8.0, "Americas", "PST"),
    ("America/Denver", "Mountain Time - US & Canada (UTC-7)", -7.0, "Americas", "MST"),
    ("America/Phoenix", "Arizona (UTC-7)", -7.0, "Americas", "MST"),
    ("America/Chicago", "Central Time - US & Canada (UTC-6)", -6.0, "Americas", "CST"),
    ("America/Mexico_City", "Mexico City (UTC-6)", -6.0, "Americas", "CST"),
    ("America/Regina", "Saskatchewan (UTC-6)", -6.0, "Americas", "CST"),
    ("America/Guatemala", "Central America (UTC-6)", -6.0, "Americas", "CST"),
    ("America/New_York", "Eastern Time - US & Canada (UTC-5)", -5.0, "Americas", "EST"),
    ("America/Toronto", "Toronto (UTC-5)", -5.0, "Americas", "EST"),
    ("America/Bogota", "Bogota (UTC-5)", -5.0, "Americas", "COT"),
    ("America/Lima", "Lima (UTC-5)", -5.0, "Americas", "PET"),
    ("America/Caracas", "Caracas (UTC-4)", -4.0, "Americas", "VET"),
    ("America/Halifax", "Atlantic Time - Canada (UTC-4)", -4.0, "Americas", "AST"),
    ("America/Santiago", "Santiago (UTC-4)", -4.0, "Americas", "CLT"),
    ("America/La_Paz", "La Paz (UTC-4)", -4.0, "Americas", "BOT"),
    ("America/St_Johns", "Newfoundland (UTC-3:30)", -3.5, "Americas", "NST"),
    ("America/Sao_Paulo", "Brasilia (UTC-3)", -3.0, "Americas", "BRT"),
    ("America/Buenos_Aires", "Buenos Aires (UTC-3)", -3.0, "Americas", "ART"),
    ("America/Montevideo", "Montevideo (UTC-3)", -3.0, "Americas", "UYT"),
    ("America/Nuuk", "Greenland (UTC-2)", -2.0, "Americas", "WGT"),
    ("America/Noronha", "Fernando de Noronha (UTC-2)", -2.0, "Americas", "FNT"),
    // Atlantic
    ("Atlantic/Bermuda", "Bermuda (UTC-4)", -4.0, "Atlantic", "AST"),
    ("Atlantic/South_Georgia", "South Georgia (UTC-2)", -2.0, "Atlantic", "GST"),
    ("Atlantic/Azores", "Azores (UTC-1)", -1.0, "Atlantic", "AZOT"),
    ("Atlantic/Cape_Verde", "Cape Verde Islands (UTC-1)", -1.0, "Atlantic", "CVT"),
    ("Atlantic/Reykjavik", "Reykjavik (UTC+0)", 0.0, "Atlantic", "GMT"),
    ("Atlantic/Canary", "Canary Islands (UTC+0)", 0.0, "Atlantic", "WET"),
    // Europe
    ("Europe/London", "London (UTC+0)", 0.0, "Europe", "GMT"),
    ("Europe/Dublin", "Dublin (UTC+0)", 0.0, "Europe", "GMT"),
    ("Europe/Lisbon", "Lisbon (UTC+0)", 0.0, "Europe", "WET"),
    ("Europe/Paris", "Paris (UTC+1)", 1.0, "Europe", "CET"),
    ("Europe/Berlin", "Berlin (UTC+1)", 1.0, "Europe", "CET"),
    ("Europe/Madrid", "Madrid (UTC+1)", 1.0, "Europe", "CET"),
    ("Europe/Rome", "Rome (UTC+1)", 1.0, "Europe", "CET"),
    ("Europe/Amsterdam", "Amsterdam (UTC+1)", 1.0, "Europe", "CET"),
    ("Europe/Warsaw", "Warsaw (UTC+1)", 1.0, "Europe", "CET"),
    ("Europe/Athens", "Athens (UTC+2)", 2.0, "Europe", "EET"),
    ("Europe/Bucharest", "Bucharest (UTC+2)", 2.0, "Europe", "EET"),
    ("Europe/Helsinki", "Helsinki (UTC+2)", 2.0, "Europe", "EET"),
    ("Europe/Kyiv", "Kyiv (UTC+2)", 2.0, "Europe", "EET"),
    ("Europe/Istanbul", "Istanbul (UTC+3)", 3.0, "Europe", "TRT"),
    ("Europe/Moscow", "Moscow (UTC+3)", 3.0, "Europe", "MSK"),
    ("Europe/Minsk", "Minsk (UTC+3)", 3.0, "Europe", "MSK"),
    ("Europe/Samara", "Samara (UTC+4)", 4.0, "Europe", "SAMT"),
    // Africa
    ("Africa/Abidjan", "Abidjan (UTC+0)", 0.0, "Africa", "GMT"),
    ("Africa/Casablanca", "Casablanca (UTC+1)", 1.0, "Africa", "WET"),
    ("Africa/Lagos", "West Central Africa (UTC+1)", 1.0, "Africa", "WAT"),
    ("Africa/Algiers", "Algiers (UTC+1)", 1.0, "Africa", "CET"),
    ("Africa/Cairo", "Cairo (UTC+2)", 2.0, "Africa", "EET"),
    ("Africa/Johannesburg", "Johannesburg (UTC+2)", 2.0, "Africa", "SAST"),
    ("Africa/Harare", "Harare (UTC+2)", 2.0, "Africa", "CAT"),
    ("Africa/Nairobi", "Nairobi (UTC+3)", 3.0, "Africa", "EAT"),
    ("Africa/Addis_Ababa", "Addis Ababa (UTC+3)", 3.0, "Africa", "EAT"),
    // Asia
    ("Asia/Jerusalem", "Jerusalem (UTC+2)", 2.0, "Asia", "IST"),
    ("Asia/Beirut", "Beirut (UTC+2)", 2.0, "Asia", "EET"),
    ("Asia/Baghdad", "Baghdad (UTC+3)", 3.0, "Asia", "AST"),
    ("Asia/Riyadh", "Riyadh (UTC+3)", 3.0, "Asia", "AST"),
    ("Asia/Kuwait", "Kuwait (UTC+3)", 3.0, "Asia", "AST"),
    ("Asia/Tehran", "Tehran (UTC+3:30)", 3.5, "Asia", "IRST"),
    ("Asia/Dubai", "Abu Dhabi, Muscat (UTC+4)", 4.0, "Asia", "GST"),
    ("Asia/Baku", "Baku (UTC+4)", 4.0, "Asia", "AZT"),
    ("Asia/Tbilisi", "Tbilisi (UTC+4)", 4.0, "Asia", "GET"),
    ("Asia/Yerevan", "Yerevan (UTC+4)", 4.0, "Asia", "AMT"),
    ("Asia/Kabul", "Kabul (UTC+4:30)", 4.5, "Asia", "AFT"),
    ("Asia/Karachi", "Pakistan (UTC+5)", 5.0, "Asia", "PKT"),
    ("Asia/Tashkent", "Uzbekistan (UTC+5)", 5.0, "Asia", "UZT"),
    ("Asia/Yekaterinburg", "Yekaterinburg (UTC+5)", 5.0, "Asia", "YEKT"),
    ("Asia/Almaty", "Kazakhstan (UTC+5)", 5.0, "Asia", "ALMT"),
    ("Asia/Kolkata", "India (UTC+5:30)", 5.5, "Asia", "IST"),
    ("Asia/Colombo", "Sri Lanka (UTC+5:30)", 5.5, "Asia", "IST"),
    ("Asia/Kathmandu", "Nepal (UTC+5:45)", 5.75, "Asia", "NPT"),
    ("Asia/Dhaka", "Bangladesh (UTC+6)", 6.0, "Asia", "BST"),
    ("Asia/Bishkek", "Kyrgyzstan (UTC+6)", 6.0, "Asia", "KGT"),
    ("Asia/Yangon", "Myanmar (UTC+6:30)", 6.5, "Asia", "MMT"),
    ("Asia/Bangkok", "Bangkok, Hanoi (UTC+7)", 7.0, "Asia", "ICT"),
    ("Asia/Jakarta", "Jakarta (UTC+7)", 7.0, "Asia", "WIB"),
    ("Asia/Novosibirsk", "Novosibirsk (UTC+7)", 7.0, "Asia", "NOVT"),
    ("Asia/Shanghai", "China (UTC+8)", 8.0, "Asia", "CST"),
    ("Asia/Hong_Kong", "Hong Kong (UTC+8)", 8.0, "Asia", "HKT"),
    ("Asia/Singapore", "Singapore (UTC+8)", 8.0, "Asia", "SGT"),
    ("Asia/Taipei", "Taipei (UTC+8)", 8.0, "Asia", "CST"),
    ("Asia/Manila", "Manila (UTC+8)", 8.0, "Asia", "PHT"),
    ("Asia/Tokyo", "Japan (UTC+9)", 9.0, "Asia", "JST"),
    ("Asia/Seoul", "Korea (UTC+9)", 9.0, "Asia", "KST"),
    ("Asia/Pyongyang", "Pyongyang (UTC+9)", 9.0, "Asia", "KST"),
    ("Asia/Vladivostok", "Vladivostok (UTC+10)", 10.0, "Asia", "VLAT"),
    ("Asia/Magadan", "Magadan (UTC+11)", 11.0, "Asia", "MAGT"),
    ("Asia/Kamchatka", "Kamchatka (UTC+12)", 12.0, "Asia", "PETT"),
    // Australia & Oceania
    ("Australia/Perth", "Perth (UTC+8)", 8.0, "Australia & Oceania", "AWST"),
    ("Australia/Eucla", "Eucla (UTC+8:45)", 8.75, "Australia & Oceania", "ACWST"),
    ("Australia/Darwin", "Darwin (UTC+9:30)", 9.5, "Australia & Oceania", "ACST"),
    ("Australia/Adelaide", "Adelaide (UTC+9:30)", 9.5, "Australia & Oceania", "ACST"),
    ("Australia/Brisbane", "Brisbane (UTC+10)", 10.0, "Australia & Oceania", "AEST"),
    ("Australia/Sydney", "Sydney, Melbourne (UTC+10)", 10.0, "Australia & Oceania", "AEST"),
    ("Australia/Hobart", "Hobart (UTC+10)", 10.0, "Australia & Oceania", "AEST"),
    ("Australia/Lord_Howe", "Lord Howe Island (UTC+10:30)", 10.5, "Australia & Oceania", "LHST"),
    ("Pacific/Auckland", "New Zealand (UTC+12)", 12.0, "Australia & Oceania", "NZST"),
];

/// The static manifest the store is seeded from on first boot.
pub static MANIFEST: Lazy<Vec<TimezoneDescriptor>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(identifier, label, offset, region, abbreviation)| {
            TimezoneDescriptor::new(identifier, label, offset, region, abbreviation)
        })
        .collect()
});
