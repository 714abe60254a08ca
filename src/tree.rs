// src/tree.rs
// Typed view of the report tree. Every field is optional: the payload
// reshapes between Workday releases, and absence at any depth means
// "no data here", not an error. Wrong-typed substructure is the one
// thing that still fails, at decode time (see extract::extract_payload).

use std::collections::HashMap;

use serde::Deserialize;

/// Payload root. Everything of interest hangs off `body`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportDoc {
    pub body: Option<Node>,
}

/// One element of the rendered report: a panel list, a field set, a grid,
/// or any of the other widget kinds we never look at.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Node {
    pub widget: Option<String>,
    pub label: Option<String>,
    pub property_name: Option<String>,
    pub children: Option<Vec<Node>>,
    pub panels: Option<Vec<Node>>,
    pub columns: Option<Vec<Column>>,
    pub rows: Option<Vec<Row>>,
}

impl Node {
    /// Direct children, or an empty slice when the list is absent.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Grouping panels, or an empty slice when the list is absent.
    pub fn panels(&self) -> &[Node] {
        self.panels.as_deref().unwrap_or(&[])
    }

    pub fn columns(&self) -> &[Column] {
        self.columns.as_deref().unwrap_or(&[])
    }

    pub fn rows(&self) -> &[Row] {
        self.rows.as_deref().unwrap_or(&[])
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children().first()
    }

    /// Label text, `""` when absent.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    pub fn widget_is(&self, kind: &str) -> bool {
        self.widget.as_deref() == Some(kind)
    }

    pub fn label_is(&self, text: &str) -> bool {
        self.label.as_deref() == Some(text)
    }

    pub fn property_is(&self, name: &str) -> bool {
        self.property_name.as_deref() == Some(name)
    }
}

/// Grid column descriptor. `column_id` keys into each row's cell map and
/// is only valid for the load it came from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Column {
    pub column_id: Option<String>,
    pub label: Option<String>,
    pub property_name: Option<String>,
}

/// Grid row: cells keyed by column id. Row order is meaningful, cell
/// order is not.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Row {
    pub cells_map: Option<HashMap<String, Cell>>,
}

impl Row {
    pub fn cell(&self, column_id: &str) -> Option<&Cell> {
        self.cells_map.as_ref()?.get(column_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Cell {
    pub instances: Option<Vec<Instance>>,
}

impl Cell {
    /// Display text of the first instance; later instances are not used.
    pub fn first_text(&self) -> Option<&str> {
        self.instances.as_deref()?.first()?.text.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Instance {
    pub text: Option<String>,
}
