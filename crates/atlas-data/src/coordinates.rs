//! Fallback marker coordinates
//!
//! Hand-maintained `[longitude, latitude]` centroids for codes whose
//! authored module omits coordinates (or has no module at all).
//! Authored values always take precedence; see
//! [`crate::dataset::StaticCountryDataset::coordinates`].

const FALLBACK: &[(&str, [f64; 2])] = &[
    ("arg", [-63.6167, -38.4161]),
    ("aus", [133.7751, -25.2744]),
    ("bra", [-51.9253, -14.235]),
    ("can", [-106.3468, 56.1304]),
    ("chn", [104.1954, 35.8617]),
    ("deu", [10.4515, 51.1657]),
    ("egy", [30.8025, 26.8206]),
    ("esp", [-3.7492, 40.4637]),
    ("fra", [2.2137, 46.2276]),
    ("gbr", [-3.436, 55.3781]),
    ("idn", [113.9213, -0.7893]),
    ("ind", [78.9629, 20.5937]),
    ("ita", [12.5674, 41.8719]),
    ("jpn", [138.2529, 36.2048]),
    ("kor", [127.7669, 35.9078]),
    ("mex", [-102.5528, 23.6345]),
    ("nga", [8.6753, 9.082]),
    ("rus", [105.3188, 61.524]),
    ("tur", [35.2433, 38.9637]),
    ("usa", [-98.5795, 39.8283]),
    ("zaf", [22.9375, -30.5595]),
];

/// Centroid for a code from the fallback table.
pub fn fallback_coordinates(code: &str) -> Option<[f64; 2]> {
    FALLBACK
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, coords)| *coords)
}
