use stashmark::{CompileOptions, Compiler, OutputFormat, compile};

#[test]
fn empty_source_compiles_to_empty_output() {
    assert_eq!(compile("").unwrap(), "");
}

#[test]
fn binds_element_attributes() {
    assert_eq!(
        compile(r#"%img{bind: {src: "logoUri"}, alt: "Logo"}"#).unwrap(),
        r#"<img {{bind-attr src="logoUri"}} alt='Logo' />"#
    );
}

#[test]
fn renders_action_attributes() {
    assert_eq!(
        compile(r#"%a{action: 'edit article on="click"'} Edit"#).unwrap(),
        r#"<a {{action edit article on="click"}}>Edit</a>"#
    );
}

#[test]
fn renders_in_tag_expressions() {
    assert_eq!(
        compile(r#"%div{hb: "testExpression"}"#).unwrap(),
        r#"<div {{testExpression}}></div>"#
    );
}

#[test]
fn renders_multiple_in_tag_expressions() {
    assert_eq!(
        compile(r#"%div{hb: ["firstTestExpression", "secondTestExpression withArgument"]}"#)
            .unwrap(),
        r#"<div {{firstTestExpression}} {{secondTestExpression withArgument}}></div>"#
    );
}

#[test]
fn renders_expressions() {
    assert_eq!(compile(r#"= hb "hello""#).unwrap(), "{{hello}}");
}

#[test]
fn renders_block_expressions() {
    assert_eq!(
        compile("= hb 'hello'\n  world.").unwrap(),
        "{{#hello}}world.{{/hello}}"
    );
}

#[test]
fn renders_expression_options() {
    assert_eq!(
        compile(r#"= hb "hello", whom: "world""#).unwrap(),
        r#"{{hello whom="world"}}"#
    );
}

#[test]
fn renders_triple_stash_expressions() {
    assert_eq!(compile(r#"= hb! "hello""#).unwrap(), "{{{hello}}}");
}

#[test]
fn renders_triple_stash_block_expressions() {
    assert_eq!(
        compile("= hb! 'hello'\n  world.").unwrap(),
        "{{{#hello}}}world.{{{/hello}}}"
    );
}

#[test]
fn renders_triple_stash_expression_options() {
    assert_eq!(
        compile(r#"= hb! "hello", whom: "world""#).unwrap(),
        r#"{{{hello whom="world"}}}"#
    );
}

#[test]
fn nested_blocks_concatenate_without_blank_lines() {
    let source = "= hb 'if a_thing_is_true'\n  = hb 'hello'\n  %a{bind: {href: 'aController'}}";
    assert_eq!(
        compile(source).unwrap(),
        "{{#if a_thing_is_true}}{{hello}}\n<a {{bind-attr href=\"aController\"}}></a>{{/if}}"
    );
}

#[test]
fn html_format_void_elements_close_without_slash() {
    let compiler = Compiler::new(CompileOptions {
        format: OutputFormat::Html,
        escape: true,
    });
    assert_eq!(
        compiler.compile(r#"%img{alt: "Logo"}"#).unwrap(),
        "<img alt='Logo'>"
    );
}

#[test]
fn element_children_render_one_per_line() {
    assert_eq!(
        compile("%ul\n  %li one\n  %li two").unwrap(),
        "<ul>\n<li>one</li>\n<li>two</li>\n</ul>"
    );
}

#[test]
fn inline_text_precedes_nested_children() {
    assert_eq!(
        compile("%p intro\n  %em loud").unwrap(),
        "<p>\nintro\n<em>loud</em>\n</p>"
    );
}

#[test]
fn attribute_values_escape_html_characters() {
    assert_eq!(
        compile(r#"%div{title: "a & b's"}"#).unwrap(),
        "<div title='a &amp; b&#39;s'></div>"
    );
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(compile("just words").unwrap(), "just words");
}
