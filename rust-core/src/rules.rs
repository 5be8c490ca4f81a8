//! Ordered rule evaluation: the first rule whose predicate holds decides.

pub struct Rule<T> {
    pub when: fn(&str) -> bool,
    pub then: T,
}

pub fn first_match<T: Copy>(rules: &[Rule<T>], text: &str) -> Option<T> {
    rules.iter().find(|rule| (rule.when)(text)).map(|rule| rule.then)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = [
            Rule { when: |t| t.contains('a'), then: 1 },
            Rule { when: |t| t.contains('b'), then: 2 },
            Rule { when: |_| true, then: 3 },
        ];
        assert_eq!(first_match(&rules, "ab"), Some(1));
        assert_eq!(first_match(&rules, "b"), Some(2));
        assert_eq!(first_match(&rules, "z"), Some(3));
        assert_eq!(first_match(&rules[..2], "z"), None);
    }
}
