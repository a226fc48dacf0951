//! CSS rule tree and compact emission
//!
//! CSS nesting is expressed as a recursive [`Rule`] tree and flattened into
//! sibling top-level rules before serialization. The flattening pass builds
//! an [`Intermediate`] per selector scope; serialization is then a pure
//! depth-first walk. Selector composition (`" > "`, `" "`, descriptor
//! suffixes, `" + "`) lives here and nowhere else.

/// One node of a CSS rule tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// `key: value;` on the current selector.
    Prop(String, String),
    /// Direct-child scope: `parent > selector`.
    Child(String, Vec<Rule>),
    /// Descendant scope: `parent selector`.
    AllChildren(String, Vec<Rule>),
    /// `@supports (feature: value) { parent { props } }`.
    Supports((String, String), Vec<(String, String)>),
    /// Direct modifier on the parent selector (pseudo-class, compound class).
    Descriptor(String, Vec<Rule>),
    /// Adjacent-sibling scope: `parent + selector`.
    Adjacent(String, Vec<Rule>),
    /// Several rule lists under the parent's own selector, no new scope.
    Batch(Vec<Rule>),
}

/// Convenience constructor for [`Rule::Prop`].
pub fn prop(key: &str, value: &str) -> Rule {
    Rule::Prop(key.to_string(), value.to_string())
}

/// A top-level selector paired with its rule tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,
    pub rules: Vec<Rule>,
}

impl Class {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Class {
            name: name.into(),
            rules,
        }
    }
}

/// A flattened selector scope, ready to serialize.
#[derive(Debug, Clone, Default)]
struct Intermediate {
    selector: String,
    props: Vec<(String, String)>,
    closing: String,
    others: Vec<Intermediate>,
}

impl Intermediate {
    fn new(selector: String) -> Self {
        Intermediate {
            selector,
            ..Default::default()
        }
    }

    fn gather(mut self, rules: &[Rule]) -> Self {
        for rule in rules {
            match rule {
                Rule::Prop(key, value) => {
                    self.props.push((key.clone(), value.clone()));
                }
                Rule::Child(selector, nested) => {
                    let child = Intermediate::new(format!("{} > {}", self.selector, selector));
                    self.others.push(child.gather(nested));
                }
                Rule::AllChildren(selector, nested) => {
                    let child = Intermediate::new(format!("{} {}", self.selector, selector));
                    self.others.push(child.gather(nested));
                }
                Rule::Supports((feature, value), props) => {
                    let supports = Intermediate {
                        selector: format!("@supports ({feature}:{value}) {{{}", self.selector),
                        props: props.clone(),
                        closing: "\n}".to_string(),
                        others: Vec::new(),
                    };
                    self.others.push(supports);
                }
                Rule::Descriptor(suffix, nested) => {
                    let child = Intermediate::new(format!("{}{}", self.selector, suffix));
                    self.others.push(child.gather(nested));
                }
                Rule::Adjacent(selector, nested) => {
                    let child = Intermediate::new(format!("{} + {}", self.selector, selector));
                    self.others.push(child.gather(nested));
                }
                Rule::Batch(batched) => {
                    self = self.gather(batched);
                }
            }
        }
        self
    }

    fn render(&self, out: &mut String) {
        // A scope with no direct props emits no block of its own, but its
        // nested scopes still render.
        if !self.props.is_empty() {
            out.push_str(&self.selector);
            out.push('{');
            for (key, value) in &self.props {
                out.push_str(key);
                out.push(':');
                out.push_str(value);
                out.push(';');
            }
            out.push('}');
            out.push_str(&self.closing);
        }
        for child in &self.others {
            child.render(out);
        }
    }
}

/// Render one class into compact CSS text.
pub fn render_class(class: &Class) -> String {
    let mut out = String::new();
    Intermediate::new(class.name.clone())
        .gather(&class.rules)
        .render(&mut out);
    out
}

/// Render a list of classes into one compact CSS string.
pub fn render(classes: &[Class]) -> String {
    let mut out = String::new();
    for class in classes {
        Intermediate::new(class.name.clone())
            .gather(&class.rules)
            .render(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_only() {
        let class = Class::new(".e", vec![prop("display", "flex"), prop("flex-direction", "row")]);
        assert_eq!(render_class(&class), ".e{display:flex;flex-direction:row;}");
    }

    #[test]
    fn test_child_nesting() {
        let class = Class::new(
            "e",
            vec![
                prop("display", "flex"),
                Rule::Child(".x".to_string(), vec![prop("color", "red")]),
            ],
        );
        assert_eq!(render_class(&class), "e{display:flex;}e > .x{color:red;}");
    }

    #[test]
    fn test_empty_parent_still_recurses() {
        let class = Class::new(
            ".wrap",
            vec![Rule::Child(".inner".to_string(), vec![prop("color", "red")])],
        );
        // No ".wrap{}" block.
        assert_eq!(render_class(&class), ".wrap > .inner{color:red;}");
    }

    #[test]
    fn test_descriptor_suffix() {
        let class = Class::new(
            ".btn",
            vec![Rule::Descriptor(":hover".to_string(), vec![prop("cursor", "pointer")])],
        );
        assert_eq!(render_class(&class), ".btn:hover{cursor:pointer;}");
    }

    #[test]
    fn test_adjacent_join() {
        let class = Class::new(
            ".sp",
            vec![Rule::Child(
                ".s".to_string(),
                vec![Rule::Adjacent(".s".to_string(), vec![prop("margin-left", "8px")])],
            )],
        );
        assert_eq!(render_class(&class), ".sp > .s + .s{margin-left:8px;}");
    }

    #[test]
    fn test_all_children_join() {
        let class = Class::new(
            ".p",
            vec![Rule::AllChildren(".t".to_string(), vec![prop("display", "inline")])],
        );
        assert_eq!(render_class(&class), ".p .t{display:inline;}");
    }

    #[test]
    fn test_supports_block() {
        let class = Class::new(
            ".g",
            vec![Rule::Supports(
                ("display".to_string(), "grid".to_string()),
                vec![("display".to_string(), "grid".to_string())],
            )],
        );
        assert_eq!(render_class(&class), "@supports (display:grid) {.g{display:grid;}\n}");
    }

    #[test]
    fn test_batch_flattens_into_same_scope() {
        let class = Class::new(
            ".a",
            vec![
                prop("color", "red"),
                Rule::Batch(vec![
                    prop("width", "10px"),
                    Rule::Child(".b".to_string(), vec![prop("height", "2px")]),
                ]),
            ],
        );
        assert_eq!(
            render_class(&class),
            ".a{color:red;width:10px;}.a > .b{height:2px;}"
        );
    }

    #[test]
    fn test_deep_nesting_flattens_to_siblings() {
        let class = Class::new(
            ".a",
            vec![Rule::Child(
                ".b".to_string(),
                vec![
                    prop("color", "blue"),
                    Rule::Child(".c".to_string(), vec![prop("color", "green")]),
                ],
            )],
        );
        assert_eq!(
            render_class(&class),
            ".a > .b{color:blue;}.a > .b > .c{color:green;}"
        );
    }
}
