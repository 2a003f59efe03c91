// =====================================================================
// File: record.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
// Description:
//   Defines the `Parcel` record stored by the index. A parcel is an
//   immutable value once constructed: destination country, weight and
//   declared value.
//
// Notes:
//   * Country names are lowercased byte-wise and capped at 20 bytes.
//     Longer names silently lose trailing characters.
//   * Range checks on weight/value belong to the ingest layer, the
//     record accepts whatever it is given.
// =====================================================================

/// Maximum number of bytes kept from a country name.
pub const MAX_COUNTRY_LEN: usize = 20;

/// Canonical form of a country name, used both when storing and when
/// querying.
///
/// # Arguments
///
/// * `country` - Raw country name from the data file or the prompt.
///
/// # Returns
///
/// The name with runs of whitespace collapsed to one space, leading and
/// trailing whitespace removed, ASCII letters lowercased, and the result
/// cut to at most [`MAX_COUNTRY_LEN`] bytes. Truncation backs off to the
/// nearest character boundary so the result is always valid UTF-8. The
/// function is idempotent.
///
/// # Example
/// ```
/// use parcelindex::normalize_country;
/// assert_eq!(normalize_country("Canada"), "canada");
/// assert_eq!(normalize_country("  New   Zealand "), "new zealand");
/// assert_eq!(normalize_country("The Democratic Republic"), "the democratic repub");
/// ```
pub fn normalize_country(country: &str) -> String {
    let collapsed = country.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut end = collapsed.len().min(MAX_COUNTRY_LEN);
    while !collapsed.is_char_boundary(end) {
        end -= 1;
    }
    // A cut right after a word must not leave a trailing space
    collapsed[..end].trim_end().to_ascii_lowercase()
}


/// A single shipment record.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    country: String,
    weight: f64,
    value: f64,
}


impl Parcel {
    /// Builds a parcel, normalizing the country name.
    ///
    /// # Example
    /// ```
    /// use parcelindex::Parcel;
    /// let p = Parcel::new("CANADA", 500.0, 100.0);
    /// assert_eq!(p.country(), "canada");
    /// assert_eq!(p.weight(), 500.0);
    /// ```
    pub fn new(country: &str, weight: f64, value: f64) -> Self {
        Self {
            country: normalize_country(country),
            weight,
            value,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
