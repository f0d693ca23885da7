//! Page view: the widgets of one page, each mounted in its own container.
//!
//! Every widget gets a `div` carrying its id, appended to the page target in
//! manifest order. Containers use `display: contents` so they add nothing to
//! layout. Events are offered to each widget until one claims them.

use crate::counter::{Counter, CounterConfig};
use crate::error::WidgetError;
use crate::registry::{AnyWidget, WidgetKind};
use tally_core::{Event, Mount, MountError, Tag};
use tally_yaml::{Page, WidgetSpec};
use tracing::{debug, info};

/// Inline style of widget containers: they take no box of their own.
pub const CONTAINER_STYLE: &str = "display: contents;";

/// A widget and the container it was mounted into.
#[derive(Debug, Clone)]
pub struct MountedWidget<N> {
    id: String,
    container: N,
    widget: AnyWidget<N>,
}

impl<N> MountedWidget<N> {
    /// Widget id (also the container's `id` attribute).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Container element.
    pub const fn container(&self) -> &N {
        &self.container
    }

    /// The mounted widget.
    pub const fn widget(&self) -> &AnyWidget<N> {
        &self.widget
    }
}

/// Widgets mounted for one page.
#[derive(Debug, Clone)]
pub struct PageView<N> {
    widgets: Vec<MountedWidget<N>>,
}

impl<N> Default for PageView<N> {
    fn default() -> Self {
        Self {
            widgets: Vec::new(),
        }
    }
}

impl<N: Clone + PartialEq> PageView<N> {
    /// Empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount every widget of `page` into `target`, in order.
    ///
    /// Containers stay detached until every widget has mounted, so a failure
    /// leaves `target` untouched.
    pub fn mount<M>(page: &Page, host: &mut M, target: &N) -> Result<Self, WidgetError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        let mut view = Self::new();
        for spec in &page.widgets {
            let mounted = view.stage_widget(spec, host)?;
            view.widgets.push(mounted);
        }
        for mounted in &view.widgets {
            host.append_child(target, &mounted.container)?;
        }
        info!(page = %page.name, widgets = view.len(), "page mounted");
        Ok(view)
    }

    /// Mount one manifest entry.
    pub fn mount_widget<M>(
        &mut self,
        spec: &WidgetSpec,
        host: &mut M,
        target: &N,
    ) -> Result<&MountedWidget<N>, WidgetError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        let mounted = self.stage_widget(spec, host)?;
        self.attach(mounted, host, target)
    }

    /// Mount a counter directly from its configuration.
    pub fn mount_counter<M>(
        &mut self,
        id: &str,
        config: &CounterConfig,
        host: &mut M,
        target: &N,
    ) -> Result<&MountedWidget<N>, WidgetError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        let mounted = self.stage(id, host, |host, container| {
            Ok(AnyWidget::Counter(Counter::mount(config, host, container)?))
        })?;
        self.attach(mounted, host, target)
    }

    fn stage_widget<M>(
        &self,
        spec: &WidgetSpec,
        host: &mut M,
    ) -> Result<MountedWidget<N>, WidgetError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        let kind: WidgetKind = spec.widget_type.parse()?;
        self.stage(&spec.id, host, |host, container| {
            AnyWidget::mount(kind, &spec.props, host, container)
        })
    }

    /// Build a widget inside a fresh, detached container.
    fn stage<M, F>(
        &self,
        id: &str,
        host: &mut M,
        build: F,
    ) -> Result<MountedWidget<N>, WidgetError>
    where
        M: Mount<Node = N> + ?Sized,
        F: FnOnce(&mut M, &N) -> Result<AnyWidget<N>, WidgetError>,
    {
        if self.get(id).is_some() {
            return Err(WidgetError::DuplicateId(id.to_string()));
        }
        let container = host.create_element(Tag::Div)?;
        host.set_attribute(&container, "id", id)?;
        host.set_attribute(&container, "style", CONTAINER_STYLE)?;
        let widget = build(host, &container)?;
        debug!(id, kind = %widget.kind(), "widget mounted");
        Ok(MountedWidget {
            id: id.to_string(),
            container,
            widget,
        })
    }

    fn attach<M>(
        &mut self,
        mounted: MountedWidget<N>,
        host: &mut M,
        target: &N,
    ) -> Result<&MountedWidget<N>, WidgetError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        host.append_child(target, &mounted.container)?;
        self.widgets.push(mounted);
        let index = self.widgets.len() - 1;
        Ok(&self.widgets[index])
    }

    /// Offer `event` to each widget in mount order. Returns `true` once a
    /// widget handles it.
    pub fn dispatch<M>(&mut self, host: &mut M, event: &Event<N>) -> Result<bool, MountError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        for mounted in &mut self.widgets {
            if mounted.widget.handle(host, event)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Click the button of counter `id` `times` times. Returns the final value.
    pub fn click_counter<M>(
        &mut self,
        id: &str,
        times: usize,
        host: &mut M,
    ) -> Result<Option<i64>, MountError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        let Some(counter) = self
            .widgets
            .iter_mut()
            .find(|w| w.id == id)
            .and_then(|w| w.widget.as_counter_mut())
        else {
            return Ok(None);
        };
        let mut value = counter.value();
        for _ in 0..times {
            value = counter.click(host)?;
        }
        Ok(Some(value))
    }

    /// Look up a mounted widget by id.
    pub fn get(&self, id: &str) -> Option<&MountedWidget<N>> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Mounted widgets in order.
    pub fn iter(&self) -> impl Iterator<Item = &MountedWidget<N>> {
        self.widgets.iter()
    }

    /// Number of mounted widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
