//! Compact and pretty renderings of selection ASTs.
//!
//! The compact form is the shortest re-parseable text
//! (`...on Query{x q{a:x}}`). The pretty form uses two-space indentation and
//! renders an empty selection set as the empty string.

use crate::ast;

pub fn print_compact_selection(selection: &ast::query::Selection) -> String {
    let mut printer = Printer::new(Style::Compact);
    printer.selection(selection);
    printer.out
}

pub fn print_compact_selection_set(selection_set: &ast::query::SelectionSet) -> String {
    let mut printer = Printer::new(Style::Compact);
    printer.selection_set(selection_set);
    printer.out
}

pub fn print_compact_fragment(fragment: &ast::query::FragmentDefinition) -> String {
    let mut printer = Printer::new(Style::Compact);
    printer.fragment_definition(fragment);
    printer.out
}

pub fn print_compact_value(value: &ast::Value) -> String {
    let mut printer = Printer::new(Style::Compact);
    printer.value(value);
    printer.out
}

/// A single-line summary of an operation, used in diagnostics.
pub(crate) fn print_compact_operation(op: &ast::query::OperationDefinition) -> String {
    use graphql_parser::query::OperationDefinition;

    let (keyword, name, selection_set) = match op {
        OperationDefinition::SelectionSet(selection_set) =>
            return print_compact_selection_set(selection_set),
        OperationDefinition::Query(query) =>
            ("query", &query.name, &query.selection_set),
        OperationDefinition::Mutation(mutation) =>
            ("mutation", &mutation.name, &mutation.selection_set),
        OperationDefinition::Subscription(subscription) =>
            ("subscription", &subscription.name, &subscription.selection_set),
    };

    let mut printer = Printer::new(Style::Compact);
    printer.out.push_str(keyword);
    if let Some(name) = name {
        printer.out.push(' ');
        printer.out.push_str(name);
    }
    printer.selection_set(selection_set);
    printer.out
}

pub fn print_pretty_document(document: &ast::query::Document) -> String {
    document.definitions.iter()
        .map(|def| match def {
            ast::query::Definition::Fragment(fragment) => {
                let mut printer = Printer::new(Style::Pretty);
                printer.fragment_definition(fragment);
                printer.out
            },
            ast::query::Definition::Operation(op) => print_compact_operation(op),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn print_pretty_selection_set(selection_set: &ast::query::SelectionSet) -> String {
    if selection_set.items.is_empty() {
        return String::new();
    }
    let mut printer = Printer::new(Style::Pretty);
    printer.selection_set(selection_set);
    printer.out
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Style {
    Compact,
    Pretty,
}

struct Printer {
    depth: usize,
    out: String,
    style: Style,
}
impl Printer {
    fn new(style: Style) -> Self {
        Self {
            depth: 0,
            out: String::new(),
            style,
        }
    }

    fn arguments(&mut self, arguments: &[(String, ast::Value)]) {
        if arguments.is_empty() {
            return;
        }
        self.out.push('(');
        for (idx, (name, value)) in arguments.iter().enumerate() {
            if idx > 0 {
                self.list_separator();
            }
            self.out.push_str(name);
            self.colon();
            self.value(value);
        }
        self.out.push(')');
    }

    fn colon(&mut self) {
        self.out.push_str(match self.style {
            Style::Compact => ":",
            Style::Pretty => ": ",
        });
    }

    fn directives(&mut self, directives: &[ast::query::Directive]) {
        for directive in directives {
            self.out.push_str(" @");
            self.out.push_str(&directive.name);
            self.arguments(&directive.arguments);
        }
    }

    fn fragment_definition(&mut self, fragment: &ast::query::FragmentDefinition) {
        let ast::query::TypeCondition::On(type_name) = &fragment.type_condition;
        self.out.push_str("fragment ");
        self.out.push_str(&fragment.name);
        self.out.push_str(" on ");
        self.out.push_str(type_name);
        self.directives(&fragment.directives);
        self.space_before_block();
        self.selection_set(&fragment.selection_set);
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn list_separator(&mut self) {
        self.out.push_str(match self.style {
            Style::Compact => ",",
            Style::Pretty => ", ",
        });
    }

    fn selection(&mut self, selection: &ast::query::Selection) {
        match selection {
            ast::query::Selection::Field(field) => {
                if let Some(alias) = &field.alias {
                    self.out.push_str(alias);
                    self.colon();
                }
                self.out.push_str(&field.name);
                self.arguments(&field.arguments);
                self.directives(&field.directives);
                if !field.selection_set.items.is_empty() {
                    self.space_before_block();
                    self.selection_set(&field.selection_set);
                }
            },

            ast::query::Selection::InlineFragment(inline) => {
                self.out.push_str("...");
                if let Some(ast::query::TypeCondition::On(type_name)) = &inline.type_condition {
                    if self.style == Style::Pretty {
                        self.out.push(' ');
                    }
                    self.out.push_str("on ");
                    self.out.push_str(type_name);
                }
                self.directives(&inline.directives);
                self.space_before_block();
                self.selection_set(&inline.selection_set);
            },

            ast::query::Selection::FragmentSpread(spread) => {
                self.out.push_str("...");
                self.out.push_str(&spread.fragment_name);
                self.directives(&spread.directives);
            },
        }
    }

    fn selection_set(&mut self, selection_set: &ast::query::SelectionSet) {
        match self.style {
            Style::Compact => {
                self.out.push('{');
                for (idx, selection) in selection_set.items.iter().enumerate() {
                    if idx > 0 {
                        self.out.push(' ');
                    }
                    self.selection(selection);
                }
                self.out.push('}');
            },

            Style::Pretty => {
                self.out.push_str("{\n");
                self.depth += 1;
                for selection in &selection_set.items {
                    self.indent();
                    self.selection(selection);
                    self.out.push('\n');
                }
                self.depth -= 1;
                self.indent();
                self.out.push('}');
            },
        }
    }

    fn space_before_block(&mut self) {
        if self.style == Style::Pretty {
            self.out.push(' ');
        }
    }

    fn value(&mut self, value: &ast::Value) {
        match value {
            ast::Value::Variable(name) => {
                self.out.push('$');
                self.out.push_str(name);
            },
            ast::Value::Int(number) =>
                self.out.push_str(&number.as_i64().unwrap_or_default().to_string()),
            ast::Value::Float(float) => {
                let printed = float.to_string();
                self.out.push_str(&printed);
                if !printed.contains(['.', 'e', 'E']) {
                    self.out.push_str(".0");
                }
            },
            ast::Value::String(string) => self.string_literal(string),
            ast::Value::Boolean(bool) => self.out.push_str(if *bool { "true" } else { "false" }),
            ast::Value::Null => self.out.push_str("null"),
            ast::Value::Enum(name) => self.out.push_str(name),
            ast::Value::List(items) => {
                self.out.push('[');
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        self.list_separator();
                    }
                    self.value(item);
                }
                self.out.push(']');
            },
            ast::Value::Object(entries) => {
                self.out.push('{');
                for (idx, (name, entry)) in entries.iter().enumerate() {
                    if idx > 0 {
                        self.list_separator();
                    }
                    self.out.push_str(name);
                    self.colon();
                    self.value(entry);
                }
                self.out.push('}');
            },
        }
    }

    fn string_literal(&mut self, string: &str) {
        self.out.push('"');
        for ch in string.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                ch if ch.is_control() =>
                    self.out.push_str(&format!("\\u{:04x}", ch as u32)),
                ch => self.out.push(ch),
            }
        }
        self.out.push('"');
    }
}
