/// Joins class fragments with single spaces, skipping blank ones.
///
/// Later fragments win in utility-first stylesheets, so call sites pass the
/// computed base classes first and caller overrides last.
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .fold(String::new(), |mut acc, part| {
            if !acc.is_empty() {
                acc.push(' ');
            }
            acc.push_str(part);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::cn;

    #[test]
    fn skips_blank_fragments() {
        assert_eq!(cn(["rounded-md", "", "  ", "px-4"]), "rounded-md px-4");
    }

    #[test]
    fn normalizes_inner_whitespace() {
        assert_eq!(cn(["h-9\n  px-4", " bg-primary "]), "h-9 px-4 bg-primary");
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(cn(std::iter::empty()).is_empty());
    }
}
