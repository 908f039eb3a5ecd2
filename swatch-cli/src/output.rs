//! Text and JSON rendering of sampler results.

use std::io::{self, Write};

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use swatch_dom::{DomTree, NodeId};
use swatch_sampler::{Color, Indicator, LayerRole, PageSample, Resolution};

/// Where results go, and in which form.
pub struct Output<W: Write> {
    writer: W,
    json: bool,
    ansi: bool,
}

#[derive(Serialize)]
struct ProbeReport {
    x: f64,
    y: f64,
    color: Color,
    css: String,
    hex: String,
}

#[derive(Serialize)]
struct TraceReport<'a> {
    x: f64,
    y: f64,
    color: Color,
    white_fallback: bool,
    layers: Vec<TraceLayer<'a>>,
}

#[derive(Serialize)]
struct TraceLayer<'a> {
    node: NodeId,
    tag: &'a str,
    id: Option<&'a str>,
    background: Option<&'a str>,
    color: Color,
    role: LayerRole,
}

#[derive(Serialize)]
struct IndicatorReport<'a> {
    event: &'a str,
    x: Option<f64>,
    y: Option<f64>,
    indicator: &'a Indicator,
    css: String,
}

impl<W: Write> Output<W> {
    pub const fn new(writer: W, json: bool, ansi: bool) -> Self {
        Self { writer, json, ansi }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Effective color at one point.
    pub fn probe(&mut self, x: f64, y: f64, color: Color) -> Result<()> {
        if self.json {
            return self.json_line(&ProbeReport {
                x,
                y,
                color,
                css: color.to_css_rgb(),
                hex: color.to_hex_string(),
            });
        }
        let swatch = self.swatch(color);
        let hex = self.styled(color.to_hex_string(), |s| s.dimmed().to_string());
        writeln!(
            self.writer,
            "{swatch}({x}, {y}) {} {hex}",
            color.to_css_rgb()
        )?;
        Ok(())
    }

    /// Page tone decision.
    pub fn theme(&mut self, sample: &PageSample) -> Result<()> {
        if self.json {
            return self.json_line(sample);
        }
        let median = sample
            .median
            .map_or_else(|| "n/a".to_string(), |m| format!("{m:.1}"));
        writeln!(
            self.writer,
            "{} {:?}: median brightness {median} over {} samples every {}px",
            sample.tone.icon(),
            sample.tone,
            sample.samples,
            sample.step_px
        )?;
        Ok(())
    }

    /// Layer breakdown at one point.
    pub fn trace(
        &mut self,
        tree: &DomTree,
        x: f64,
        y: f64,
        resolution: &Resolution<NodeId>,
    ) -> Result<()> {
        let layers: Vec<TraceLayer<'_>> = resolution
            .layers
            .iter()
            .map(|layer| {
                let element = tree.as_element(layer.node);
                TraceLayer {
                    node: layer.node,
                    tag: element.map_or("?", |e| e.tag_name.as_str()),
                    id: element.and_then(|e| e.id.as_deref()),
                    background: tree.background(layer.node),
                    color: layer.color,
                    role: layer.role,
                }
            })
            .collect();

        if self.json {
            return self.json_line(&TraceReport {
                x,
                y,
                color: resolution.color,
                white_fallback: resolution.white_fallback,
                layers,
            });
        }

        if layers.is_empty() {
            writeln!(self.writer, "({x}, {y}) hits nothing")?;
        }
        for layer in &layers {
            let name = layer
                .id
                .map_or_else(|| layer.tag.to_string(), |id| format!("{}#{id}", layer.tag));
            let role = match layer.role {
                LayerRole::Backdrop => {
                    self.styled("backdrop".to_string(), |s| s.bold().to_string())
                }
                LayerRole::Blended => "blended".to_string(),
                LayerRole::Skipped => {
                    self.styled("skipped".to_string(), |s| s.dimmed().to_string())
                }
            };
            let swatch = self.swatch(layer.color);
            writeln!(
                self.writer,
                "  {swatch}{name:<24} {:<28} {role}",
                layer.background.unwrap_or("(none)")
            )?;
        }
        if resolution.white_fallback {
            let swatch = self.swatch(Color::WHITE);
            writeln!(self.writer, "  {swatch}{:<24} {:<28} backdrop", "(page)", "white")?;
        }
        let swatch = self.swatch(resolution.color);
        writeln!(self.writer, "= {swatch}{}", resolution.color.to_css_rgb())?;
        Ok(())
    }

    /// The indicator was created (or recreated) with its tone.
    pub fn indicator_created(&mut self, indicator: &Indicator) -> Result<()> {
        if self.json {
            return self.json_line(&IndicatorReport {
                event: "created",
                x: None,
                y: None,
                indicator,
                css: indicator.css_background(),
            });
        }
        let swatch = self.swatch(indicator.fill());
        writeln!(
            self.writer,
            "{} indicator {swatch}{}",
            indicator.icon(),
            indicator.css_background()
        )?;
        Ok(())
    }

    /// The pointer moved and the indicator shows a new color.
    pub fn indicator_moved(&mut self, x: f64, y: f64, indicator: &Indicator) -> Result<()> {
        if self.json {
            return self.json_line(&IndicatorReport {
                event: "moved",
                x: Some(x),
                y: Some(y),
                indicator,
                css: indicator.css_background(),
            });
        }
        let swatch = self.swatch(indicator.fill());
        writeln!(
            self.writer,
            "({x}, {y}) {swatch}{}",
            indicator.css_background()
        )?;
        Ok(())
    }

    fn json_line<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// `text` with `style` applied when ANSI output is on.
    fn styled(&self, text: String, style: impl FnOnce(&str) -> String) -> String {
        if self.ansi { style(&text) } else { text }
    }

    /// A small block of `color` followed by a space, or nothing without ANSI.
    fn swatch(&self, color: Color) -> String {
        if self.ansi {
            format!("{} ", "    ".on_truecolor(color.r, color.g, color.b))
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_dom::parse_scene;
    use swatch_sampler::Sampler;

    fn render(json: bool, f: impl FnOnce(&mut Output<&mut Vec<u8>>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut Output::new(&mut buffer, json, false)).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_probe_plain_text_has_no_escapes() {
        let text = render(false, |out| out.probe(1.0, 2.0, Color::rgb(18, 52, 86)));
        assert_eq!(text, "(1, 2) rgb(18, 52, 86) #123456\n");
    }

    #[test]
    fn test_probe_json() {
        let text = render(true, |out| out.probe(1.5, 2.0, Color::rgb(255, 0, 0)));
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["css"], "rgb(255, 0, 0)");
        assert_eq!(value["hex"], "#ff0000");
        assert_eq!(value["color"]["r"], 255);
        assert_eq!(value["x"], 1.5);
    }

    #[test]
    fn test_trace_lists_layers_and_fallback() {
        let tree = parse_scene(
            r#"{
                "viewport": { "width": 100, "height": 100 },
                "root": {
                    "tag": "html",
                    "background": "rgba(0, 0, 0, 0)",
                    "rect": [0, 0, 100, 100],
                    "children": [
                        {
                            "tag": "div",
                            "id": "veil",
                            "background": "rgba(0, 0, 0, 0.5)",
                            "rect": [0, 0, 50, 50]
                        }
                    ]
                }
            }"#,
        )
        .unwrap();
        let resolution = Sampler::new(&tree).trace_at(10.0, 10.0);
        let text = render(false, |out| out.trace(&tree, 10.0, 10.0, &resolution));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("div#veil") && lines[0].ends_with("blended"));
        assert!(lines[1].contains("html") && lines[1].ends_with("skipped"));
        assert!(lines[2].contains("(page)") && lines[2].ends_with("backdrop"));
        assert_eq!(lines[3], "= rgb(128, 128, 128)");
    }
}
