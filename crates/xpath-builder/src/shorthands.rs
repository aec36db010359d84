//! Named shorthands over the generic builder calls.
//!
//! Both tables below are the whole vocabulary; each entry expands to plain
//! delegation.

use crate::builder::PathBuilder;
use crate::component::PathComponent;
use crate::component_type::ComponentType;

macro_rules! segment_shorthands {
    ($($bare:ident, $with:ident => $ty:ident;)*) => {
        impl PathBuilder {
            $(
                #[doc = concat!("Append a bare `/", stringify!($ty), "` segment")]
                pub fn $bare(&mut self) -> &mut Self {
                    self.add_segment(ComponentType::$ty)
                }

                #[doc = concat!("Append a `/", stringify!($ty), "` segment with predicates")]
                pub fn $with<F>(&mut self, configure: F) -> &mut Self
                where
                    F: FnOnce(&mut PathComponent),
                {
                    self.add_segment_with(ComponentType::$ty, configure)
                }
            )*
        }
    };
}

segment_shorthands! {
    window, window_with => Window;
    pane, pane_with => Pane;
    button, button_with => Button;
    custom, custom_with => Custom;
    data_item, data_item_with => DataItem;
    group, group_with => Group;
    radio_button, radio_button_with => RadioButton;
}

impl PathBuilder {
    /// Append a segment with an arbitrary element name and predicates
    pub fn custom_component<F>(&mut self, name: &str, configure: F) -> &mut Self
    where
        F: FnOnce(&mut PathComponent),
    {
        self.add_segment_with(name, configure)
    }
}

macro_rules! predicate_shorthands {
    ($($method:ident => $attribute:literal;)*) => {
        impl PathComponent {
            $(
                #[doc = concat!("Add a `[@", $attribute, "=\"...\"]` clause")]
                pub fn $method(&mut self, value: &str) -> &mut Self {
                    self.with_parameter($attribute, value)
                }
            )*
        }
    };
}

predicate_shorthands! {
    with_class_name => "ClassName";
    with_automation_id => "AutomationId";
    with_name => "Name";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h0_shorthand_01_every_segment() {
        let mut builder = PathBuilder::new();
        builder
            .window()
            .pane()
            .button()
            .custom()
            .data_item()
            .group()
            .radio_button();
        assert_eq!(
            builder.build(),
            "/Window/Pane/Button/Custom/DataItem/Group/RadioButton"
        );
    }

    #[test]
    fn h0_shorthand_02_matches_generic_call() {
        for ty in ComponentType::ALL {
            let mut generic = PathBuilder::new();
            generic.add_segment(ty);
            assert_eq!(generic.build(), format!("/{ty}"));
        }

        let mut short = PathBuilder::new();
        short.button_with(|b| {
            b.with_automation_id("Ok");
        });
        let mut generic = PathBuilder::new();
        generic.add_segment_with(ComponentType::Button, |b| {
            b.with_parameter("AutomationId", "Ok");
        });
        assert_eq!(short.build(), generic.build());
    }

    #[test]
    fn h0_shorthand_03_internal_withs() {
        let mut builder = PathBuilder::new();
        builder.window_with(|w| {
            w.with_name("TestWindow");
            w.with_class_name("TestClass");
        });
        assert_eq!(
            builder.build(),
            r#"/Window[@Name="TestWindow"][@ClassName="TestClass"]"#
        );
    }

    #[test]
    fn h0_shorthand_04_custom_component() {
        let mut builder = PathBuilder::new();
        builder.custom_component("ListItem", |item| {
            item.starts_with("Name", "Row");
        });
        assert_eq!(builder.build(), r#"/ListItem[starts-with(@Name,"Row")]"#);
    }
}
