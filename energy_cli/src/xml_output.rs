use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Cursor;

use energy_analytics::{ChartSeries, DashboardView, EnergyBar, InsightSummary, KpiSummary, TrendPoint};

use crate::output::Keys;

/// Singularize array field names for XML child elements.
fn singular(field: &str) -> &str {
    match field {
        "years" => "year",
        "types" => "type",
        "buildings" => "building",
        "labels" => "label",
        "values" => "value",
        "top_emitters" => "record",
        "energy" => "bar",
        "trend" => "point",
        _ => field,
    }
}

/// Turns a JSON key into a valid element name.
///
/// Dataset columns such as `Total GHG Emissions (KG)` contain spaces and
/// punctuation; each run of those becomes a single underscore.
fn element_name(key: &str) -> String {
    let name = key
        .split(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    match name.chars().next() {
        Some(c) if !c.is_ascii_digit() => name,
        _ => format!("_{}", name),
    }
}

/// Recursively write a serde_json::Value as XML elements.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &serde_json::Value,
) -> Result<(), quick_xml::Error> {
    match value {
        serde_json::Value::Null => {
            // Omit null fields entirely
        }
        serde_json::Value::Bool(b) => {
            write_text(writer, tag, if *b { "true" } else { "false" })?;
        }
        serde_json::Value::Number(n) => {
            write_text(writer, tag, &n.to_string())?;
        }
        serde_json::Value::String(s) => {
            write_text(writer, tag, s)?;
        }
        serde_json::Value::Array(arr) => {
            if arr.is_empty() {
                writer.write_event(Event::Empty(BytesStart::new(tag)))?;
                return Ok(());
            }
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            let child_tag = singular(tag);
            for item in arr {
                write_value(writer, child_tag, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for (key, val) in map {
                write_value(writer, &element_name(key), val)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
    }
    Ok(())
}

fn write_text<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Serialize one value as an XML document whose root is `root_tag`.
fn to_xml_document<T: Serialize>(root_tag: &str, item: &T) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let val = serde_json::to_value(item)?;
    if val.is_null() {
        writer.write_event(Event::Empty(BytesStart::new(root_tag)))?;
    } else {
        write_value(&mut writer, root_tag, &val)?;
    }

    let buf = writer.into_inner().into_inner();
    Ok(String::from_utf8(buf)?)
}

/// Serialize a slice of Serialize items into an XML string.
fn items_to_xml<T: Serialize>(root_tag: &str, item_tag: &str, items: &[T]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    if items.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(root_tag)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(root_tag)))?;
        for item in items {
            let val = serde_json::to_value(item)?;
            write_value(&mut writer, item_tag, &val)?;
        }
        writer.write_event(Event::End(BytesEnd::new(root_tag)))?;
    }

    let buf = writer.into_inner().into_inner();
    Ok(String::from_utf8(buf)?)
}

pub fn keys_to_xml(keys: &Keys) -> Result<String> {
    to_xml_document("keys", keys)
}

pub fn kpis_to_xml(kpis: &KpiSummary<'_>) -> Result<String> {
    to_xml_document("kpis", kpis)
}

pub fn insight_to_xml(insight: &InsightSummary) -> Result<String> {
    to_xml_document("insight", insight)
}

pub fn energy_to_xml(bars: &[EnergyBar]) -> Result<String> {
    items_to_xml("energy", "bar", bars)
}

pub fn trend_to_xml(points: &[TrendPoint]) -> Result<String> {
    items_to_xml("trend", "point", points)
}

pub fn shares_to_xml(series: &ChartSeries) -> Result<String> {
    to_xml_document("shares", series)
}

pub fn dashboard_to_xml(view: &DashboardView<'_>) -> Result<String> {
    to_xml_document("dashboard", view)
}
