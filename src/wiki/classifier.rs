//! Declaration Classifier
//!
//! Maps a declaration's shape to template categories. Classes are classified
//! once per decorator, independently, so a class carrying two recognized
//! decorators yields two categories in decorator order. Every other kind maps
//! to exactly one category.
//!
//! ## Decorator table
//!
//! | Decorator    | Category                      |
//! |--------------|-------------------------------|
//! | `Component`  | component                     |
//! | `Directive`  | directive                     |
//! | `Pipe`       | pipe                          |
//! | `NgModule`   | module                        |
//! | `Injectable` | by implemented contract below |
//!
//! `Injectable` contracts, first match wins:
//! `HttpInterceptor` → interceptor, a route guard → guard,
//! `Resolve<...>` → resolver, anything else → service.

use crate::types::{Declaration, DeclarationKind, TemplateCategory};

/// What a recognized decorator resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoratorRule {
    Fixed(TemplateCategory),
    ByContract,
}

const DECORATOR_RULES: &[(&str, DecoratorRule)] = &[
    ("Component", DecoratorRule::Fixed(TemplateCategory::Component)),
    ("Directive", DecoratorRule::Fixed(TemplateCategory::Directive)),
    ("Pipe", DecoratorRule::Fixed(TemplateCategory::Pipe)),
    ("NgModule", DecoratorRule::Fixed(TemplateCategory::Module)),
    ("Injectable", DecoratorRule::ByContract),
];

/// How an implemented contract's written name is matched
#[derive(Debug, Clone, Copy)]
enum ContractMatch {
    Exact(&'static [&'static str]),
    Prefix(&'static str),
}

impl ContractMatch {
    fn matches(&self, written: &str) -> bool {
        match self {
            Self::Exact(names) => names.contains(&written),
            Self::Prefix(prefix) => written.starts_with(*prefix),
        }
    }
}

/// `Injectable` sub-classification in priority order
const INJECTABLE_CONTRACTS: &[(ContractMatch, TemplateCategory)] = &[
    (
        ContractMatch::Exact(&["HttpInterceptor"]),
        TemplateCategory::Interceptor,
    ),
    (
        ContractMatch::Exact(&["CanActivate", "CanActivateChild", "CanDeactivate", "CanLoad"]),
        TemplateCategory::Guard,
    ),
    (ContractMatch::Prefix("Resolve<"), TemplateCategory::Resolver),
];

/// Resolve a single decorator against the class's implemented contracts.
///
/// Returns `None` for decorators outside the table.
pub fn classify_decorator<S: AsRef<str>>(
    decorator: &str,
    implements: &[S],
) -> Option<TemplateCategory> {
    let rule = DECORATOR_RULES
        .iter()
        .find(|(name, _)| *name == decorator)
        .map(|(_, rule)| *rule)?;

    match rule {
        DecoratorRule::Fixed(category) => Some(category),
        DecoratorRule::ByContract => Some(classify_injectable(implements)),
    }
}

fn classify_injectable<S: AsRef<str>>(implements: &[S]) -> TemplateCategory {
    INJECTABLE_CONTRACTS
        .iter()
        .find(|(matcher, _)| implements.iter().any(|c| matcher.matches(c.as_ref())))
        .map(|(_, category)| *category)
        .unwrap_or(TemplateCategory::Service)
}

/// One `(decorator, category)` pair per recognized decorator, in the order
/// the decorators are written.
pub fn classify_class<D, I>(decorators: &[D], implements: &[I]) -> Vec<(String, TemplateCategory)>
where
    D: AsRef<str>,
    I: AsRef<str>,
{
    decorators
        .iter()
        .filter_map(|d| {
            let name = d.as_ref();
            classify_decorator(name, implements).map(|category| (name.to_string(), category))
        })
        .collect()
}

/// Categories for any declaration, in the order jobs should be emitted.
pub fn classify(declaration: &Declaration) -> Vec<TemplateCategory> {
    match declaration.kind {
        DeclarationKind::Class => classify_class(&declaration.decorators, &declaration.implements)
            .into_iter()
            .map(|(_, category)| category)
            .collect(),
        DeclarationKind::Interface => vec![TemplateCategory::Interface],
        DeclarationKind::Enum => vec![TemplateCategory::Enum],
        DeclarationKind::TypeAlias => vec![TemplateCategory::Type],
        DeclarationKind::ExportedConst => vec![TemplateCategory::Constant],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NONE: &[&str] = &[];

    fn injectable(implements: &[&str]) -> Option<TemplateCategory> {
        classify_decorator("Injectable", implements)
    }

    #[test]
    fn test_fixed_decorators() {
        assert_eq!(
            classify_decorator("Component", NONE),
            Some(TemplateCategory::Component)
        );
        assert_eq!(
            classify_decorator("Directive", NONE),
            Some(TemplateCategory::Directive)
        );
        assert_eq!(classify_decorator("Pipe", NONE), Some(TemplateCategory::Pipe));
        assert_eq!(
            classify_decorator("NgModule", NONE),
            Some(TemplateCategory::Module)
        );
    }

    #[test]
    fn test_fixed_decorators_ignore_contracts() {
        assert_eq!(
            classify_decorator("Component", &["HttpInterceptor", "OnInit"]),
            Some(TemplateCategory::Component)
        );
    }

    #[test]
    fn test_unknown_decorator() {
        assert_eq!(classify_decorator("Input", NONE), None);
        assert_eq!(classify_decorator("component", NONE), None);
        assert_eq!(classify_decorator("", NONE), None);
    }

    #[test]
    fn test_injectable_priority() {
        assert_eq!(injectable(&[]), Some(TemplateCategory::Service));
        assert_eq!(injectable(&["OnDestroy"]), Some(TemplateCategory::Service));
        assert_eq!(
            injectable(&["HttpInterceptor"]),
            Some(TemplateCategory::Interceptor)
        );
        assert_eq!(
            injectable(&["Resolve<Hero>", "CanActivate"]),
            Some(TemplateCategory::Guard)
        );
        assert_eq!(
            injectable(&["CanDeactivate<EditComponent>", "Resolve<Hero>"]),
            Some(TemplateCategory::Resolver)
        );
        assert_eq!(
            injectable(&["CanLoad", "HttpInterceptor"]),
            Some(TemplateCategory::Interceptor)
        );
    }

    #[test]
    fn test_guard_contracts_match_exact_names() {
        for name in ["CanActivate", "CanActivateChild", "CanDeactivate", "CanLoad"] {
            assert_eq!(injectable(&[name]), Some(TemplateCategory::Guard), "{}", name);
        }
        // Written name must match exactly; qualified names fall through.
        assert_eq!(
            injectable(&["router.CanActivate"]),
            Some(TemplateCategory::Service)
        );
    }

    #[test]
    fn test_resolver_requires_type_argument() {
        assert_eq!(injectable(&["Resolve"]), Some(TemplateCategory::Service));
        assert_eq!(injectable(&["Resolver<Hero>"]), Some(TemplateCategory::Service));
        assert_eq!(
            injectable(&["Resolve<Observable<Hero[]>>"]),
            Some(TemplateCategory::Resolver)
        );
    }

    #[test]
    fn test_classify_class_one_entry_per_decorator() {
        let result = classify_class(&["Component", "Injectable", "Custom"], NONE);
        assert_eq!(
            result,
            vec![
                ("Component".to_string(), TemplateCategory::Component),
                ("Injectable".to_string(), TemplateCategory::Service),
            ]
        );
    }

    #[test]
    fn test_classify_non_class_kinds() {
        let cases = [
            (DeclarationKind::Interface, TemplateCategory::Interface),
            (DeclarationKind::Enum, TemplateCategory::Enum),
            (DeclarationKind::TypeAlias, TemplateCategory::Type),
            (DeclarationKind::ExportedConst, TemplateCategory::Constant),
        ];
        for (kind, expected) in cases {
            let decl = Declaration::new("X", kind, "");
            assert_eq!(classify(&decl), vec![expected]);
        }
    }

    #[test]
    fn test_classify_undecorated_class() {
        let decl = Declaration::class("Plain", "class Plain {}", Vec::<String>::new(), ["OnInit"]);
        assert!(classify(&decl).is_empty());
    }

    fn recognized() -> Vec<&'static str> {
        DECORATOR_RULES.iter().map(|(name, _)| *name).collect()
    }

    proptest! {
        #[test]
        fn prop_unrecognized_decorators_yield_nothing(
            decorators in prop::collection::vec("[A-Za-z][A-Za-z0-9_]{0,12}", 0..6),
            implements in prop::collection::vec("[A-Za-z<>]{1,16}", 0..4),
        ) {
            let known = recognized();
            let decorators: Vec<String> = decorators
                .into_iter()
                .filter(|d| !known.contains(&d.as_str()))
                .collect();
            prop_assert!(classify_class(&decorators, &implements).is_empty());
        }

        #[test]
        fn prop_interceptor_wins_regardless_of_position(
            others in prop::collection::vec(
                prop::sample::select(vec![
                    "CanActivate", "CanActivateChild", "CanDeactivate", "CanLoad",
                    "Resolve<Hero>", "OnDestroy",
                ]),
                0..6,
            ),
            position in 0usize..7,
        ) {
            let mut implements: Vec<&str> = others;
            let at = position.min(implements.len());
            implements.insert(at, "HttpInterceptor");
            prop_assert_eq!(injectable(&implements), Some(TemplateCategory::Interceptor));
        }

        #[test]
        fn prop_resolve_of_any_type_is_resolver(type_arg in "[A-Za-z][A-Za-z0-9_<>\\[\\]]{0,20}") {
            let contract = format!("Resolve<{}>", type_arg);
            prop_assert_eq!(injectable(&[contract.as_str()]), Some(TemplateCategory::Resolver));
        }

        #[test]
        fn prop_unrecognized_contracts_are_service(
            implements in prop::collection::vec("[A-Z][a-z]{2,10}", 0..5),
        ) {
            let implements: Vec<String> = implements
                .into_iter()
                .filter(|c| !matches!(
                    c.as_str(),
                    "CanActivate" | "CanActivateChild" | "CanDeactivate" | "CanLoad"
                ))
                .collect();
            prop_assert_eq!(
                classify_decorator("Injectable", &implements),
                Some(TemplateCategory::Service)
            );
        }
    }
}
