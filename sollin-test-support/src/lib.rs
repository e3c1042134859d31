//! Shared test utilities used across sollin crates.

pub mod tracing {
    //! Recording layer for asserting on spans and events in tests.
    //!
    //! Worker threads re-enter the caller's dispatcher, so one layer installed
    //! around a `Sollin::run` call sees the events of every worker.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Layer that captures closed spans and emitted events for later
    /// assertions.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Returns the closed spans in completion order.
        ///
        /// # Examples
        /// ```
        /// use sollin_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            self.spans().into_iter().find(|span| span.name == name)
        }

        /// Returns the emitted events in emission order.
        ///
        /// # Examples
        /// ```
        /// use sollin_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.events().is_empty());
        /// ```
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns the events at `level` whose message equals `message`.
        #[must_use]
        pub fn events_with_message(&self, level: Level, message: &str) -> Vec<EventRecord> {
            self.events()
                .into_iter()
                .filter(|event| event.level == level && event.message() == Some(message))
                .collect()
        }
    }

    /// Snapshot of a closed span.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Fields recorded against the span, rendered as strings.
        pub fields: HashMap<String, String>,
    }

    /// Snapshot of an emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Level of the event.
        pub level: Level,
        /// Target from the metadata.
        pub target: String,
        /// Name of the innermost span the event was emitted in, if any.
        pub parent: Option<String>,
        /// Fields attached to the event, rendered as strings.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the `message` field.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }

        /// Returns the field called `name`.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    struct SpanData {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            id: &tracing::span::Id,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut data = SpanData {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldRecorder(&mut data.fields));
            span.extensions_mut().insert(data);
        }

        fn on_record(
            &self,
            id: &tracing::span::Id,
            values: &tracing::span::Record<'_>,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut extensions = span.extensions_mut();
            if let Some(data) = extensions.get_mut::<SpanData>() {
                values.record(&mut FieldRecorder(&mut data.fields));
            }
        }

        fn on_close(&self, id: tracing::span::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(data) = span.extensions_mut().remove::<SpanData>() else {
                return;
            };
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(SpanRecord {
                    name: data.name,
                    fields: data.fields,
                });
        }

        fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder(&mut fields));
            let parent = ctx.event_span(event).map(|span| span.name().to_owned());
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(EventRecord {
                    level: *event.metadata().level(),
                    target: event.metadata().target().to_owned(),
                    parent,
                    fields,
                });
        }
    }

    struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

    impl FieldRecorder<'_> {
        fn insert(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.insert(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.insert(field, value.to_string());
        }
    }
}

pub mod graphs {
    //! Reference graphs shared by the core, provider, and CLI test suites.
    //!
    //! Graphs are plain `(source, target, weight)` triples so this crate does
    //! not depend on `sollin-core`.

    /// A graph given as a vertex count and an edge list.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ReferenceGraph {
        /// Number of vertices.
        pub vertex_count: usize,
        /// Edges in edge-id order.
        pub edges: &'static [(usize, usize, u64)],
        /// Weight of the minimum spanning tree, or of the spanning forest when
        /// the graph is disconnected.
        pub mst_weight: u64,
    }

    impl ReferenceGraph {
        /// Renders the graph in the `V E` / `u v w` edge-list text format.
        ///
        /// # Examples
        /// ```
        /// use sollin_test_support::graphs::FOUR_VERTEX;
        ///
        /// let text = FOUR_VERTEX.to_edge_list();
        /// assert!(text.starts_with("4 5\n0 1 10\n"));
        /// ```
        #[must_use]
        pub fn to_edge_list(&self) -> String {
            let header = format!("{} {}\n", self.vertex_count, self.edges.len());
            self.edges
                .iter()
                .map(|(source, target, weight)| format!("{source} {target} {weight}\n"))
                .fold(header, |mut text, line| {
                    text.push_str(&line);
                    text
                })
        }
    }

    /// Four vertices, five edges; the tree is edges 2, 0 and 4.
    pub const FOUR_VERTEX: ReferenceGraph = ReferenceGraph {
        vertex_count: 4,
        edges: &[(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
        mst_weight: 19,
    };

    /// The complete graph on seven vertices with small integer weights.
    pub const SEVEN_VERTEX_COMPLETE: ReferenceGraph = ReferenceGraph {
        vertex_count: 7,
        edges: &[
            (0, 1, 2),
            (0, 2, 8),
            (0, 3, 5),
            (0, 4, 1),
            (0, 5, 10),
            (0, 6, 5),
            (1, 2, 9),
            (1, 3, 9),
            (1, 4, 3),
            (1, 5, 5),
            (1, 6, 6),
            (2, 3, 6),
            (2, 4, 2),
            (2, 5, 8),
            (2, 6, 2),
            (3, 4, 2),
            (3, 5, 6),
            (3, 6, 3),
            (4, 5, 8),
            (4, 6, 7),
            (5, 6, 2),
        ],
        mst_weight: 11,
    };

    /// Two triangles with no edge between them.
    pub const TWO_TRIANGLES: ReferenceGraph = ReferenceGraph {
        vertex_count: 6,
        edges: &[(0, 1, 1), (1, 2, 2), (0, 2, 3), (3, 4, 1), (4, 5, 2), (3, 5, 3)],
        mst_weight: 6,
    };

}

pub mod ci;
