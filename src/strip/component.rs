//! The heat strip component and its lifecycle.
//!
//! A [`HeatStrip`] owns an isolated [`RenderTarget`] and regenerates it from
//! its two observed attributes, `data` and `size`. The host drives it through
//! [`HeatStrip::on_mount`] and attribute changes; unchanged values never
//! trigger a render.

use super::render::{Attributes, StripRender};
use tracing::{debug, trace};

/// Attribute holding the comma-separated status sequence.
pub const DATA_ATTRIBUTE: &str = "data";
/// Attribute selecting the size preset.
pub const SIZE_ATTRIBUTE: &str = "size";

const OBSERVED_ATTRIBUTES: [&str; 2] = [DATA_ATTRIBUTE, SIZE_ATTRIBUTE];

/// The isolated subtree a component renders into.
#[cfg_attr(test, mockall::automock)]
pub trait RenderTarget {
    /// Replace the whole subtree with a freshly derived render.
    fn replace(&mut self, render: &StripRender);
}

/// Scoped render target keeping the latest render and its markup.
#[derive(Debug, Default, Clone)]
pub struct ShadowRoot {
    render: Option<StripRender>,
    markup: String,
}

impl ShadowRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest render, if any has happened.
    pub fn render(&self) -> Option<&StripRender> {
        self.render.as_ref()
    }

    /// Markup of the latest render; empty before the first render.
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl RenderTarget for ShadowRoot {
    fn replace(&mut self, render: &StripRender) {
        self.markup = render.to_markup().into_string();
        self.render = Some(render.clone());
    }
}

/// Attribute-driven status strip.
pub struct HeatStrip<T: RenderTarget> {
    attributes: Attributes,
    target: T,
    mounted: bool,
    render_count: u64,
}

impl<T: RenderTarget> HeatStrip<T> {
    /// Create an unmounted strip. Nothing is rendered until it is mounted or
    /// an observed attribute changes.
    pub fn new(target: T) -> Self {
        Self {
            attributes: Attributes::default(),
            target,
            mounted: false,
            render_count: 0,
        }
    }

    /// Names of the attributes that trigger re-rendering.
    pub fn observed_attributes() -> &'static [&'static str] {
        &OBSERVED_ATTRIBUTES
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of renders performed so far.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Called when the strip is attached to a live document.
    pub fn on_mount(&mut self) {
        self.mounted = true;
        self.render();
    }

    /// Set an attribute. Observed attributes are forwarded to
    /// [`Self::attribute_changed`]; anything else is ignored.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.update_attribute(name, Some(value));
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.update_attribute(name, None);
    }

    fn update_attribute(&mut self, name: &str, value: Option<&str>) {
        let slot = match name {
            DATA_ATTRIBUTE => &mut self.attributes.data,
            SIZE_ATTRIBUTE => &mut self.attributes.size,
            _ => {
                trace!(attribute = name, "ignoring unobserved attribute");
                return;
            }
        };
        let old = std::mem::replace(slot, value.map(str::to_string));
        self.attribute_changed(name, old.as_deref(), value);
    }

    /// Re-render when an observed attribute actually changed value.
    pub fn attribute_changed(&mut self, name: &str, old: Option<&str>, new: Option<&str>) {
        if !OBSERVED_ATTRIBUTES.contains(&name) {
            return;
        }
        if old == new {
            trace!(attribute = name, "attribute unchanged, skipping render");
            return;
        }
        self.render();
    }

    /// Replace the whole attribute set at once; renders only when `new`
    /// differs from the attributes the strip currently holds. The host's
    /// `old` may be stale and is only logged.
    pub fn on_props_changed(&mut self, old: &Attributes, new: Attributes) {
        let changed = self.attributes != new;
        if *old != self.attributes {
            trace!(?old, current = ?self.attributes, "stale previous attributes from host");
        }
        self.attributes = new;
        if changed {
            self.render();
        }
    }

    fn render(&mut self) {
        let render = StripRender::derive(&self.attributes);
        debug!(
            blocks = render.len(),
            size = %render.size,
            "rendering heat strip"
        );
        self.target.replace(&render);
        self.render_count += 1;
    }
}

impl Default for HeatStrip<ShadowRoot> {
    fn default() -> Self {
        Self::new(ShadowRoot::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip::color::Rgb;
    use crate::strip::size::SizePreset;
    use mockall::predicate::function;

    #[test]
    fn test_observed_attributes() {
        assert_eq!(HeatStrip::<ShadowRoot>::observed_attributes(), &["data", "size"]);
    }

    #[test]
    fn test_mount_renders_defaults() {
        let mut strip = HeatStrip::new(ShadowRoot::new());
        assert!(strip.target().render().is_none());
        assert_eq!(strip.target().markup(), "");

        strip.on_mount();

        assert!(strip.is_mounted());
        let render = strip.target().render().unwrap();
        assert!(render.is_empty());
        assert_eq!(render.size, SizePreset::Medium);
        assert!(strip.target().markup().contains("heat-strip-container"));
    }

    #[test]
    fn test_mount_uses_present_attributes() {
        let mut strip = HeatStrip::new(ShadowRoot::new());
        strip.set_attribute("data", "ok,warning,error,unknown");
        strip.set_attribute("size", "large");
        strip.on_mount();

        let render = strip.target().render().unwrap();
        assert_eq!(render.len(), 4);
        assert_eq!(render.dimensions.width, 16);
        assert_eq!(render.blocks[3].color, Rgb::FALLBACK);
    }

    #[test]
    fn test_unchanged_value_does_not_rerender() {
        let mut strip = HeatStrip::new(ShadowRoot::new());
        strip.on_mount();
        assert_eq!(strip.render_count(), 1);

        strip.set_attribute("data", "ok");
        assert_eq!(strip.render_count(), 2);

        strip.set_attribute("data", "ok");
        assert_eq!(strip.render_count(), 2);

        strip.set_attribute("data", "ok,error");
        assert_eq!(strip.render_count(), 3);
    }

    #[test]
    fn test_absent_to_absent_is_a_noop() {
        let mut strip = HeatStrip::new(ShadowRoot::new());
        strip.on_mount();
        strip.remove_attribute("size");
        assert_eq!(strip.render_count(), 1);

        strip.attribute_changed("size", None, None);
        assert_eq!(strip.render_count(), 1);
    }

    #[test]
    fn test_unobserved_attributes_ignored() {
        let mut strip = HeatStrip::new(ShadowRoot::new());
        strip.on_mount();
        strip.set_attribute("class", "fancy");
        strip.attribute_changed("title", Some("a"), Some("b"));
        assert_eq!(strip.render_count(), 1);
        assert_eq!(strip.attributes(), &Attributes::default());
    }

    #[test]
    fn test_change_before_mount_still_renders() {
        let mut strip = HeatStrip::new(ShadowRoot::new());
        strip.set_attribute("size", "small");
        assert!(!strip.is_mounted());
        assert_eq!(strip.render_count(), 1);
        assert_eq!(strip.target().render().unwrap().size, SizePreset::Small);
    }

    #[test]
    fn test_props_changed() {
        let mut strip = HeatStrip::new(ShadowRoot::new());
        strip.on_mount();

        let old = strip.attributes().clone();
        strip.on_props_changed(&old, old.clone());
        assert_eq!(strip.render_count(), 1);

        let new = Attributes::new(Some("error"), Some("small"));
        strip.on_props_changed(&old, new.clone());
        assert_eq!(strip.render_count(), 2);
        assert_eq!(strip.attributes(), &new);
        assert_eq!(strip.target().render().unwrap().blocks[0].state, "error");
    }

    #[test]
    fn test_props_changed_ignores_stale_old() {
        let mut strip = HeatStrip::new(ShadowRoot::new());
        strip.set_attribute("data", "ok");
        strip.on_mount();
        assert_eq!(strip.render_count(), 2);

        let new = Attributes::new(Some("error,error"), None);
        strip.on_props_changed(&new.clone(), new.clone());
        assert_eq!(strip.render_count(), 3);
        assert_eq!(strip.target().render().unwrap().len(), 2);

        strip.on_props_changed(&Attributes::default(), new);
        assert_eq!(strip.render_count(), 3);
    }

    #[test]
    fn test_invalid_input_yields_complete_render() {
        let mut strip = HeatStrip::new(ShadowRoot::new());
        strip.set_attribute("data", " ,,, ");
        strip.set_attribute("size", "gigantic");
        strip.on_mount();

        let render = strip.target().render().unwrap();
        assert!(render.is_empty());
        assert_eq!(render.dimensions, SizePreset::Medium.dimensions());
    }

    #[test]
    fn test_target_receives_one_replace_per_change() {
        let mut target = MockRenderTarget::new();
        target
            .expect_replace()
            .with(function(|render: &StripRender| render.is_empty()))
            .times(1)
            .return_const(());
        target
            .expect_replace()
            .with(function(|render: &StripRender| render.len() == 2))
            .times(1)
            .return_const(());

        let mut strip = HeatStrip::new(target);
        strip.on_mount();
        strip.set_attribute("data", "ok,error");
        strip.set_attribute("data", "ok,error");
    }
}
