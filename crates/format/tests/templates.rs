use chronogen_calendar::Date;
use chronogen_format::{CustomPattern, FormatError, compile};

fn render_template(template: &str, date: Date, separator: &str) -> String {
    let rendered: Vec<String> = compile(template)
        .unwrap()
        .into_iter()
        .map(|token| token.render(date))
        .collect();
    rendered.join(separator)
}

#[test]
fn documented_samples() {
    let date = Date::new(2024, 12, 31).unwrap();
    assert_eq!(render_template("YYYYMMDD", date, ""), "20241231");
    assert_eq!(render_template("DDMMYYYY", date, ""), "31122024");
    assert_eq!(render_template("DDMMYY", date, "."), "31.12.24");
    assert_eq!(render_template("MMDDYYYY", date, "/"), "12/31/2024");
    assert_eq!(render_template("YYMMDD", date, "-"), "24-12-31");
}

#[test]
fn token_order_follows_template_not_calendar() {
    let date = Date::new(2024, 1, 2).unwrap();
    assert_eq!(render_template("DDYYYY", date, ""), "022024");
    assert_eq!(render_template("MMYYYY", date, " "), "01 2024");
}

#[test]
fn rejects_documented_invalid_templates() {
    for bad in ["", "QQ", "YYYYY", "MMM", "YMDY"] {
        assert!(
            matches!(compile(bad), Err(FormatError::Empty | FormatError::InvalidChar { .. } | FormatError::YearRun { .. } | FormatError::MonthRun { .. } | FormatError::DayRun { .. } | FormatError::Repeated { .. })),
            "expected {bad:?} to be rejected"
        );
    }
}

#[test]
fn custom_pattern_agrees_with_equivalent_template() {
    let date = Date::new(2024, 12, 31).unwrap();
    let pattern = CustomPattern::new("%Y%m%d").unwrap();
    let naive = chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    assert_eq!(
        pattern.render(naive).unwrap(),
        render_template("YYYYMMDD", date, "")
    );
}
