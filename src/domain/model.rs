/// MediaWiki page id.
pub type PageId = u64;

/// MediaWiki namespace number (0 = article, 1 = talk, ...).
pub type Namespace = i32;

/// One row of the node table handed to the graph builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: PageId,
    pub namespace: Namespace,
    pub title: String,
}

impl NodeRecord {
    pub fn new(id: PageId, namespace: Namespace, title: impl Into<String>) -> Self {
        Self {
            id,
            namespace,
            title: title.into(),
        }
    }

    pub fn key(&self) -> PageKey {
        PageKey {
            namespace: self.namespace,
            title: self.title.clone(),
        }
    }
}

/// One link row: the source is known by id, the target only by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEdge {
    pub from_id: PageId,
    pub from_namespace: Namespace,
    pub to_namespace: Namespace,
    pub to_title: String,
}

impl RawEdge {
    pub fn new(
        from_id: PageId,
        from_namespace: Namespace,
        to_namespace: Namespace,
        to_title: impl Into<String>,
    ) -> Self {
        Self {
            from_id,
            from_namespace,
            to_namespace,
            to_title: to_title.into(),
        }
    }
}

/// Exact-match identity of a page: case-sensitive title within a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageKey {
    pub namespace: Namespace,
    pub title: String,
}

/// A node of a built graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub namespace: Namespace,
    pub title: String,
}

impl From<NodeRecord> for Page {
    fn from(rec: NodeRecord) -> Self {
        Self {
            id: rec.id,
            namespace: rec.namespace,
            title: rec.title,
        }
    }
}
