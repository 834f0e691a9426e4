//! Score-to-band clarification tables.
//!
//! Banding is table-driven with fixed thresholds. Each function is a total
//! mapping over the reals: every score falls into exactly one band.

/// Band a Flesch Reading Ease score.
///
/// Scores outside 0..=100 are "Unknown"; inside, higher is easier.
pub fn flesch_reading_ease_band(score: f64) -> String {
    let band = if !(0.0..=100.0).contains(&score) {
        "Unknown"
    } else if score < 30.0 {
        "Very Confusing"
    } else if score < 50.0 {
        "Difficult"
    } else if score < 60.0 {
        "Fairly Difficult"
    } else if score < 70.0 {
        "Standard"
    } else if score < 80.0 {
        "Fairly Easy"
    } else if score < 90.0 {
        "Easy"
    } else {
        "Very Easy"
    };
    band.to_string()
}

/// Describe a numeric grade as a school level.
///
/// Grades 9 and up get named school levels; below 9 the grade is formatted
/// as an ordinal ("8th grade"). Fractional grades below 9 keep their
/// fraction in the label, with the suffix taken from the integer part.
pub fn grade_level_description(grade: f64) -> String {
    if grade >= 17.0 {
        return "College graduate".to_string();
    }
    if grade >= 16.0 {
        return "College senior".to_string();
    }
    if grade >= 15.0 {
        return "College junior".to_string();
    }
    if grade >= 14.0 {
        return "College sophomore".to_string();
    }
    if grade >= 13.0 {
        return "College freshman".to_string();
    }
    if grade >= 12.0 {
        return "High school senior".to_string();
    }
    if grade >= 11.0 {
        return "High school junior".to_string();
    }
    if grade >= 10.0 {
        return "High school sophomore".to_string();
    }
    if grade >= 9.0 {
        return "High school freshman".to_string();
    }

    let number = super::definition::format_numeric(grade);
    format!("{}{} grade", number, ordinal_suffix(grade.trunc() as i64))
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, ... with the 11th/12th/13th
/// exceptions.
pub fn ordinal_suffix(n: i64) -> &'static str {
    let n = n.abs();
    match n % 100 {
        11 | 12 | 13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Band an Automated Readability Index score.
///
/// Fractional scores interpolate between the floor and ceiling grade
/// levels ("8th grade - High school freshman"); whole scores use a
/// single label.
pub fn ari_grade_band(score: f64) -> String {
    let grade_start = score.floor();
    let grade_end = score.ceil();
    if grade_start == grade_end {
        return grade_level_description(score);
    }
    format!(
        "{} - {}",
        grade_level_description(grade_start),
        grade_level_description(grade_end)
    )
}

/// Band a Dale-Chall readability score into a student-grade description.
pub fn dale_chall_band(score: f64) -> String {
    let band = if score < 5.0 {
        "Average 4th-grade student or lower"
    } else if score < 6.0 {
        "Average 5th or 6th-grade student"
    } else if score < 7.0 {
        "Average 7th or 8th-grade student"
    } else if score < 8.0 {
        "Average 9th or 10th-grade student"
    } else if score < 9.0 {
        "Average 11th or 12th-grade student"
    } else if score < 10.0 {
        "Average college student"
    } else {
        "Unknown student grade"
    };
    band.to_string()
}
