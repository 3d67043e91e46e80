//! Design tokens used by the presentation layer

pub mod color {
    pub const WHITE_100: &str = "#FFFFFF";
    pub const WHITE_200: &str = "#FBFBFB";
    pub const WHITE_300: &str = "#F4F4F4";
    pub const WHITE_400: &str = "#E3E3E3";
    pub const WHITE_500: &str = "#CBCBCB";
    pub const BLACK_100: &str = "#000000";
    pub const BLACK_200: &str = "#2A2A2A";
    pub const BLACK_300: &str = "#444444";
    pub const BLACK_400: &str = "#666666";
    pub const BLACK_500: &str = "#888888";

    pub const ALL: [(&str, &str); 10] = [
        ("white100", WHITE_100),
        ("white200", WHITE_200),
        ("white300", WHITE_300),
        ("white400", WHITE_400),
        ("white500", WHITE_500),
        ("black100", BLACK_100),
        ("black200", BLACK_200),
        ("black300", BLACK_300),
        ("black400", BLACK_400),
        ("black500", BLACK_500),
    ];
}

pub mod radius {
    pub const SM: &str = "2px";
    pub const MD: &str = "6px";

    pub const ALL: [(&str, &str); 2] = [("sm", SM), ("md", MD)];
}

pub mod font_size {
    pub const SM: &str = "12px";
    pub const MD: &str = "15px";

    pub const ALL: [(&str, &str); 2] = [("sm", SM), ("md", MD)];
}

pub mod space {
    pub const S5: &str = "5px";
    pub const S10: &str = "10px";
    pub const S15: &str = "15px";
    pub const S20: &str = "20px";
    pub const S25: &str = "25px";
    pub const S30: &str = "30px";
    pub const S35: &str = "35px";
    pub const S40: &str = "40px";
    pub const S45: &str = "45px";

    pub const ALL: [(&str, &str); 9] = [
        ("5", S5),
        ("10", S10),
        ("15", S15),
        ("20", S20),
        ("25", S25),
        ("30", S30),
        ("35", S35),
        ("40", S40),
        ("45", S45),
    ];
}

/// All tokens as CSS custom properties on `:root`, e.g. `--space-10: 10px;`
pub fn stylesheet() -> String {
    let groups: [(&str, &[(&str, &str)]); 4] = [
        ("color", &color::ALL),
        ("radius", &radius::ALL),
        ("font-size", &font_size::ALL),
        ("space", &space::ALL),
    ];

    let mut css = String::from(":root {\n");
    for (group, entries) in groups {
        for (name, value) in entries {
            css.push_str(&format!("  --{}-{}: {};\n", group, name, value));
        }
    }
    css.push('}');
    css
}
