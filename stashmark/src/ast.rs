#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),                  // alt: "Logo"
    Map(Vec<(String, String)>),   // bind: { src: "logoUri" }
    List(Vec<String>),            // hb: ["first", "second withArg"]
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttrEntry {
    pub name: String,
    pub value: AttrValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<AttrEntry>,
        /// Trailing inline text on the element line, e.g. `%a{..} Edit`.
        text: Option<String>,
        children: Vec<Node>,
    },
    Directive {
        name: String,
        escaped: bool,
        args: Vec<String>,
        options: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
}
