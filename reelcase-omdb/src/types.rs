//! OMDb response payloads and normalization into the collection model.

use reelcase_catalog::NewMovie;
use serde::Deserialize;

use crate::error::OmdbError;

/// The subset of an OMDb title response this tool consumes.
///
/// OMDb sends every field as a string and uses `"N/A"` for absent values.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbPayload {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

impl OmdbPayload {
    /// Whether OMDb reported a successful match.
    pub fn found(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    /// Normalize the payload into a [`NewMovie`].
    ///
    /// Title, year, and rating are required; an entry OMDb itself marks
    /// `"N/A"` is not worth storing. The poster is optional.
    pub fn normalize(self) -> Result<NewMovie, OmdbError> {
        let title = required(self.title, "title")?;
        let year = parse_year(&required(self.year, "year")?)?;
        let rating_str = required(self.imdb_rating, "rating")?;
        let rating: f64 = rating_str
            .parse()
            .map_err(|_| OmdbError::Api(format!("Unparseable rating '{}'", rating_str)))?;
        let poster_url = self.poster.filter(|p| p != "N/A" && !p.is_empty());

        Ok(NewMovie {
            title,
            year,
            rating,
            poster_url,
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, OmdbError> {
    match value {
        Some(v) if v != "N/A" && !v.is_empty() => Ok(v),
        _ => Err(OmdbError::MissingField(name)),
    }
}

/// Parse the leading year from an OMDb year string.
///
/// Series come back as ranges ("2010–2013"); the leading digits are the
/// release year either way.
fn parse_year(value: &str) -> Result<i32, OmdbError> {
    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits
        .parse()
        .map_err(|_| OmdbError::Api(format!("Unparseable year '{}'", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> OmdbPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn normalizes_a_full_response() {
        let movie = payload(
            r#"{"Title":"Batman","Year":"1989","imdbRating":"7.5",
                "Poster":"https://img.omdbapi.com/batman.jpg","Response":"True"}"#,
        )
        .normalize()
        .unwrap();

        assert_eq!(movie.title, "Batman");
        assert_eq!(movie.year, 1989);
        assert_eq!(movie.rating, 7.5);
        assert_eq!(
            movie.poster_url.as_deref(),
            Some("https://img.omdbapi.com/batman.jpg")
        );
    }

    #[test]
    fn absent_poster_becomes_none() {
        let movie = payload(
            r#"{"Title":"Batman","Year":"1989","imdbRating":"7.5",
                "Poster":"N/A","Response":"True"}"#,
        )
        .normalize()
        .unwrap();
        assert!(movie.poster_url.is_none());
    }

    #[test]
    fn year_ranges_take_the_leading_year() {
        let movie = payload(
            r#"{"Title":"Sherlock","Year":"2010–2017","imdbRating":"9.1",
                "Poster":"N/A","Response":"True"}"#,
        )
        .normalize()
        .unwrap();
        assert_eq!(movie.year, 2010);
    }

    #[test]
    fn missing_rating_is_rejected() {
        let err = payload(
            r#"{"Title":"Obscurity","Year":"1999","imdbRating":"N/A",
                "Poster":"N/A","Response":"True"}"#,
        )
        .normalize()
        .unwrap_err();
        assert!(matches!(err, OmdbError::MissingField("rating")));
    }

    #[test]
    fn error_payload_is_not_found() {
        let p = payload(r#"{"Response":"False","Error":"Movie not found!"}"#);
        assert!(!p.found());
        assert_eq!(p.error.as_deref(), Some("Movie not found!"));
    }
}
