use crate::data::model::{LabelPair, SeriesHeader};

pub const TIME_LABEL: &str = "Time (ps)";
pub const DEFAULT_X_LABEL: &str = "X-axis";
pub const DEFAULT_Y_LABEL: &str = "Y-axis";

/// Filename keyword → y-axis label, scanned in order; first match wins.
///
/// More specific keys sit above the generic ones they contain
/// (`potential` / `kinetic` before `energy`).
pub const PROPERTY_LABELS: &[(&str, &str)] = &[
    ("rmsd", "RMSD (nm)"),
    ("gyrate", "Radius of Gyration (nm)"),
    ("temperature", "Temperature (K)"),
    ("pressure", "Pressure (bar)"),
    ("volume", "Volume (nm^3)"),
    ("density", "Density (kg/m^3)"),
    ("potential", "Potential Energy (kJ/mol)"),
    ("kinetic", "Kinetic Energy (kJ/mol)"),
    ("enthalpy", "Enthalpy (kJ/mol)"),
    ("energy", "Energy (kJ/mol)"),
    ("sasa", "SASA (nm^2)"),
    ("hbond", "Hydrogen Bonds"),
    ("distance", "Distance (nm)"),
];

/// Pick axis labels from the file name alone.
pub fn resolve(filename: &str) -> LabelPair {
    let name = filename.to_lowercase();
    PROPERTY_LABELS
        .iter()
        .find(|(key, _)| name.contains(*key))
        .map(|(_, label)| LabelPair::new(TIME_LABEL, *label))
        .unwrap_or_else(|| LabelPair::new(DEFAULT_X_LABEL, DEFAULT_Y_LABEL))
}

/// Prefer the labels the file declares itself, falling back per axis to
/// [`resolve`].
pub fn resolve_with_header(filename: &str, header: &SeriesHeader) -> LabelPair {
    let fallback = resolve(filename);
    LabelPair {
        x: header.x_label.clone().unwrap_or(fallback.x),
        y: header.y_label.clone().unwrap_or(fallback.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_properties() {
        assert_eq!(resolve("rmsd_bb.xvg"), LabelPair::new("Time (ps)", "RMSD (nm)"));
        assert_eq!(
            resolve("temperature_1.xvg"),
            LabelPair::new("Time (ps)", "Temperature (K)")
        );
        assert_eq!(resolve("energy.xvg").y, "Energy (kJ/mol)");
    }

    #[test]
    fn unknown_name_falls_back() {
        assert_eq!(resolve("weird123.xvg"), LabelPair::new("X-axis", "Y-axis"));
        assert_eq!(resolve(""), LabelPair::new("X-axis", "Y-axis"));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(resolve("Protein_RMSD.XVG").y, "RMSD (nm)");
    }

    #[test]
    fn first_declared_key_wins() {
        // both `pressure` and `temperature`: temperature is declared first
        assert_eq!(resolve("pressure_vs_temperature.xvg").y, "Temperature (K)");
        assert_eq!(resolve("potential_energy.xvg").y, "Potential Energy (kJ/mol)");
    }

    #[test]
    fn no_key_matches_the_extension() {
        for (key, _) in PROPERTY_LABELS {
            assert!(!".xvg".contains(*key));
        }
    }

    #[test]
    fn header_labels_take_precedence_per_axis() {
        let header = SeriesHeader {
            title: None,
            x_label: Some("Time (ns)".into()),
            y_label: None,
        };
        assert_eq!(
            resolve_with_header("rmsd.xvg", &header),
            LabelPair::new("Time (ns)", "RMSD (nm)")
        );
        assert_eq!(
            resolve_with_header("weird.xvg", &SeriesHeader::default()),
            LabelPair::new("X-axis", "Y-axis")
        );
    }
}
