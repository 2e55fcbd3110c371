//! Generic searchable single-select, used by the wizard for the department,
//! province, ward and ID-issuer fields.
//!
//! The component is a closed button showing the current selection; opening it
//! reveals a search box and the filtered option list. Filtering is a pure
//! function (`filter_options`) over `(value, label)` pairs: case-insensitive
//! substring match on the label, original order preserved. Selecting an
//! option emits its value through `on_select` and closes the list; closing
//! without selecting leaves the prior value untouched. A disabled picker
//! never opens (the wizard disables the ward picker until a province is
//! chosen).

use yew::prelude::*;

/// One selectable entry: the emitted `value` and the displayed `label`.
#[derive(Clone, PartialEq)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
}

impl PickerOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Returns the subsequence of `options` whose label contains `query` as a
/// case-insensitive substring, in the original order. An empty query keeps
/// everything.
pub fn filter_options(options: &[PickerOption], query: &str) -> Vec<PickerOption> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct PickerProps {
    pub options: Vec<PickerOption>,
    /// Currently selected value; empty string means nothing selected.
    pub value: String,
    pub placeholder: String,
    #[prop_or_default]
    pub disabled: bool,
    pub on_select: Callback<String>,
}

pub enum PickerMsg {
    Toggle,
    QueryChanged(String),
    Select(String),
}

pub struct SearchablePicker {
    open: bool,
    query: String,
}

impl Component for SearchablePicker {
    type Message = PickerMsg;
    type Properties = PickerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            query: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PickerMsg::Toggle => {
                if ctx.props().disabled {
                    return false;
                }
                self.open = !self.open;
                self.query.clear();
                true
            }
            PickerMsg::QueryChanged(query) => {
                self.query = query;
                true
            }
            PickerMsg::Select(value) => {
                self.open = false;
                self.query.clear();
                ctx.props().on_select.emit(value);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        // Label of the current selection, or the placeholder.
        let current = props
            .options
            .iter()
            .find(|option| !props.value.is_empty() && option.value == props.value)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| props.placeholder.clone());

        let filtered = filter_options(&props.options, &self.query);

        html! {
            <div class={classes!("picker", if props.disabled { "picker-disabled" } else { "" })}>
                <button
                    type="button"
                    class="picker-toggle"
                    disabled={props.disabled}
                    onclick={link.callback(|_| PickerMsg::Toggle)}
                >
                    { current }
                </button>
                {
                    if self.open {
                        html! {
                            <div class="picker-panel">
                                <input
                                    type="text"
                                    class="picker-search"
                                    placeholder="Tìm kiếm..."
                                    value={self.query.clone()}
                                    oninput={link.callback(|e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        PickerMsg::QueryChanged(input.value())
                                    })}
                                />
                                <ul class="picker-options">
                                    {
                                        for filtered.into_iter().map(|option| {
                                            let value = option.value.clone();
                                            html! {
                                                <li>
                                                    <button
                                                        type="button"
                                                        class="picker-option"
                                                        onclick={link.callback(move |_| PickerMsg::Select(value.clone()))}
                                                    >
                                                        { option.label }
                                                    </button>
                                                </li>
                                            }
                                        })
                                    }
                                </ul>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_options, PickerOption};

    fn provinces() -> Vec<PickerOption> {
        vec![
            PickerOption::new("01", "Hà Nội"),
            PickerOption::new("79", "TP. Hồ Chí Minh"),
            PickerOption::new("48", "Đà Nẵng"),
        ]
    }

    #[test]
    fn empty_query_keeps_all_options_in_order() {
        let filtered = filter_options(&provinces(), "");
        let labels: Vec<&str> = filtered.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Hà Nội", "TP. Hồ Chí Minh", "Đà Nẵng"]);
    }

    #[test]
    fn match_is_case_insensitive_substring_on_label() {
        let filtered = filter_options(&provinces(), "hồ chí");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].value, "79");
    }

    #[test]
    fn no_match_yields_empty_list() {
        assert!(filter_options(&provinces(), "Cần Thơ").is_empty());
    }

    #[test]
    fn relative_order_is_preserved() {
        let options = vec![
            PickerOption::new("a", "Phường An Hải"),
            PickerOption::new("b", "Phường Hải Châu"),
            PickerOption::new("c", "Phường An Khê"),
        ];
        let filtered = filter_options(&options, "an");
        let values: Vec<&str> = filtered.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["a", "c"]);
    }
}
