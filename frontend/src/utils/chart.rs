use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

use crate::utils::format::CategoryShare;

pub const CATEGORY_PALETTE: [&str; 5] = ["#FF5B04", "#075056", "#F4D47C", "#233038", "#D3DBDD"];

const TOOLTIP_LABEL_BODY: &str = "return context.label + ': $' + context.parsed.toFixed(2);";

pub trait ChartHandle {
    fn destroy(self);
}

/// Owns at most one live chart. `replace` releases the previous chart before
/// building the next one so two charts never draw on the same canvas.
pub struct ChartSlot<H: ChartHandle> {
    current: Option<H>,
}

impl<H: ChartHandle> Default for ChartSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: ChartHandle> ChartSlot<H> {
    pub fn replace(&mut self, build: impl FnOnce() -> Option<H>) {
        self.clear();
        self.current = build();
    }

    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            old.destroy();
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }
}

pub fn doughnut_config(shares: &[CategoryShare]) -> Value {
    let labels: Vec<&str> = shares.iter().map(|s| s.category.as_str()).collect();
    let values: Vec<f64> = shares.iter().map(|s| s.amount).collect();
    json!({
        "type": "doughnut",
        "data": {
            "labels": labels,
            "datasets": [{
                "data": values,
                "backgroundColor": CATEGORY_PALETTE,
                "borderWidth": 0
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "position": "bottom" },
                "tooltip": { "callbacks": {} }
            }
        }
    })
}

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(item: &JsValue, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

/// Chart.js doughnut bound to a canvas element.
pub struct DoughnutChart {
    inner: Chart,
}

impl DoughnutChart {
    pub fn mount(canvas: &web_sys::HtmlCanvasElement, shares: &[CategoryShare]) -> Option<Self> {
        let config = match build_js_config(shares) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to build chart config: {:?}", err);
                return None;
            }
        };
        match Chart::new(canvas.as_ref(), &config) {
            Ok(inner) => Some(Self { inner }),
            Err(err) => {
                log::warn!("Chart.js unavailable, category chart skipped: {:?}", err);
                None
            }
        }
    }
}

impl ChartHandle for DoughnutChart {
    fn destroy(self) {
        self.inner.destroy();
    }
}

fn build_js_config(shares: &[CategoryShare]) -> Result<JsValue, JsValue> {
    let config = js_sys::JSON::parse(&doughnut_config(shares).to_string())?;
    let callbacks = ["options", "plugins", "tooltip", "callbacks"]
        .iter()
        .try_fold(config.clone(), |node, key| {
            js_sys::Reflect::get(&node, &JsValue::from_str(key))
        })?;
    let label = js_sys::Function::new_with_args("context", TOOLTIP_LABEL_BODY);
    js_sys::Reflect::set(&callbacks, &JsValue::from_str("label"), &label)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingChart {
        id: u32,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingChart {
        fn build(id: u32, log: &Rc<RefCell<Vec<String>>>) -> Option<Self> {
            log.borrow_mut().push(format!("create {id}"));
            Some(Self {
                id,
                log: log.clone(),
            })
        }
    }

    impl ChartHandle for RecordingChart {
        fn destroy(self) {
            self.log.borrow_mut().push(format!("destroy {}", self.id));
        }
    }

    fn share(category: &str, amount: f64) -> CategoryShare {
        CategoryShare {
            category: category.into(),
            amount,
            percentage: 0.0,
        }
    }

    #[test]
    fn replace_destroys_previous_chart_before_building() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = ChartSlot::default();

        slot.replace(|| RecordingChart::build(1, &log));
        slot.replace(|| RecordingChart::build(2, &log));
        slot.clear();

        assert_eq!(
            *log.borrow(),
            vec!["create 1", "destroy 1", "create 2", "destroy 2"]
        );
        assert!(!slot.is_occupied());
    }

    #[test]
    fn failed_build_leaves_slot_empty() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = ChartSlot::default();
        slot.replace(|| RecordingChart::build(1, &log));
        slot.replace(|| None);
        assert!(!slot.is_occupied());
        assert_eq!(*log.borrow(), vec!["create 1", "destroy 1"]);
    }

    #[test]
    fn doughnut_config_lists_categories_and_amounts() {
        let config = doughnut_config(&[share("streaming", 25.98), share("software", 9.99)]);
        assert_eq!(config["type"], json!("doughnut"));
        assert_eq!(config["data"]["labels"], json!(["streaming", "software"]));
        assert_eq!(config["data"]["datasets"][0]["data"], json!([25.98, 9.99]));
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"][0], json!("#FF5B04"));
        assert_eq!(config["options"]["plugins"]["legend"]["position"], json!("bottom"));
    }
}
