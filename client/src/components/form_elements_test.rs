use super::*;

#[test]
fn button_class_combines_variant_and_size() {
    assert_eq!(button_class(ButtonVariant::Primary, ButtonSize::Md, false), "btn btn--primary btn--md");
    assert_eq!(button_class(ButtonVariant::Outline, ButtonSize::Lg, true), "btn btn--outline btn--lg btn--block");
}

#[test]
fn button_defaults_are_primary_medium() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    assert_eq!(ButtonSize::default(), ButtonSize::Md);
}

#[test]
fn input_class_reflects_icon_and_error() {
    assert_eq!(input_class(false, false), "field__input");
    assert!(input_class(true, false).contains("field__input--icon"));
    assert!(input_class(false, true).ends_with("field__input--error"));
    let both = input_class(true, true);
    assert!(both.contains("--icon") && both.contains("--error"));
}
