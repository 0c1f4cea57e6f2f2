use stashmark::{DirectiveForm, DirectiveInvocation, render_expression};

fn hello(escaped: bool, body: Option<&str>) -> DirectiveInvocation {
    DirectiveInvocation {
        name: "hello".to_string(),
        escaped,
        args: Vec::new(),
        options: Vec::new(),
        body: body.map(str::to_string),
    }
}

#[test]
fn four_forms_emit_matching_delimiters() {
    assert_eq!(render_expression(&hello(true, None), true).value, "{{hello}}");
    assert_eq!(
        render_expression(&hello(false, None), true).value,
        "{{{hello}}}"
    );
    assert_eq!(
        render_expression(&hello(true, Some("world.")), true).value,
        "{{#hello}}world.{{/hello}}"
    );
    assert_eq!(
        render_expression(&hello(false, Some("world.")), true).value,
        "{{{#hello}}}world.{{{/hello}}}"
    );
}

#[test]
fn form_tag_reflects_escaping_and_body() {
    assert_eq!(hello(true, None).form(), DirectiveForm::InlineEscaped);
    assert_eq!(hello(false, None).form(), DirectiveForm::InlineUnescaped);
    assert_eq!(hello(true, Some("x")).form(), DirectiveForm::BlockEscaped);
    assert_eq!(hello(false, Some("x")).form(), DirectiveForm::BlockUnescaped);
}

#[test]
fn args_then_options_in_declaration_order() {
    let inv = DirectiveInvocation {
        name: "if".to_string(),
        escaped: true,
        args: vec!["a_thing".to_string(), "another".to_string()],
        options: vec![
            ("whom".to_string(), "world".to_string()),
            ("when".to_string(), "now".to_string()),
        ],
        body: None,
    };
    assert_eq!(
        render_expression(&inv, true).value,
        "{{if a_thing another whom=\"world\" when=\"now\"}}"
    );
}

#[test]
fn block_options_render_in_the_opening_tag_only() {
    let inv = DirectiveInvocation {
        options: vec![("whom".to_string(), "world".to_string())],
        body: Some("hi".to_string()),
        ..DirectiveInvocation::inline("hello")
    };
    assert_eq!(
        render_expression(&inv, true).value,
        "{{#hello whom=\"world\"}}hi{{/hello}}"
    );
}

#[test]
fn empty_invocation_emits_no_delimiters() {
    let inv = DirectiveInvocation::inline("");
    assert_eq!(render_expression(&inv, true).value, "");
    assert_eq!(render_expression(&inv, false).value, "");
}

#[test]
fn policy_controls_the_pre_escaped_mark() {
    // The mark follows the policy, never the directive form, and never
    // changes the emitted characters.
    for escaped in [true, false] {
        let on = render_expression(&hello(escaped, None), true);
        let off = render_expression(&hello(escaped, None), false);
        assert!(on.pre_escaped);
        assert!(!off.pre_escaped);
        assert_eq!(on.value, off.value);
    }
}
