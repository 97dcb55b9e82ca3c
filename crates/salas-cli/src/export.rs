//! File export of the per-slot availability table.
//!
//! Mirrors the structure the original reports used: one row per (slot, room)
//! pair, split into available and occupied sets. JSON carries both arrays;
//! the CSV twin flattens them into one sheet with a `status` column, since
//! the corpus has no spreadsheet writer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use salas_engine::availability::SlotAvailability;

/// One exported row: a room's state during one 30-minute slot.
#[derive(Debug, Clone, Serialize)]
struct Row {
    data: String,
    dia_semana: String,
    horario: String,
    sala: String,
    predio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    curso: Option<String>,
}

#[derive(Serialize)]
struct Export {
    salas_disponiveis: Vec<Row>,
    salas_ocupadas: Vec<Row>,
}

/// Portuguese weekday name, as the original reports print it.
fn weekday_pt(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

fn build_rows(slots: &[SlotAvailability], date: NaiveDate) -> Export {
    let data = date.format("%Y-%m-%d").to_string();
    let dia_semana = weekday_pt(date).to_string();

    let mut salas_disponiveis = Vec::new();
    let mut salas_ocupadas = Vec::new();

    for slot in slots {
        let horario = slot.window.to_string();
        for room in &slot.free {
            salas_disponiveis.push(Row {
                data: data.clone(),
                dia_semana: dia_semana.clone(),
                horario: horario.clone(),
                sala: room.room.clone(),
                predio: room.building.clone(),
                curso: None,
            });
        }
        for room in &slot.occupied {
            salas_ocupadas.push(Row {
                data: data.clone(),
                dia_semana: dia_semana.clone(),
                horario: horario.clone(),
                sala: room.room.clone(),
                predio: room.building.clone(),
                curso: Some(room.course.clone()),
            });
        }
    }

    Export {
        salas_disponiveis,
        salas_ocupadas,
    }
}

/// Write `salas_disponiveis_<timestamp>.json` under `out_dir`.
pub fn write_json(
    slots: &[SlotAvailability],
    date: NaiveDate,
    out_dir: &Path,
    timestamp: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let path = out_dir.join(format!("salas_disponiveis_{timestamp}.json"));
    let export = build_rows(slots, date);
    let body = serde_json::to_string_pretty(&export)?;
    std::fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}

/// Write `salas_disponiveis_<timestamp>.csv` under `out_dir`, all rows in
/// one sheet with a livre/ocupada status column.
pub fn write_csv(
    slots: &[SlotAvailability],
    date: NaiveDate,
    out_dir: &Path,
    timestamp: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let path = out_dir.join(format!("salas_disponiveis_{timestamp}.csv"));
    let export = build_rows(slots, date);

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer.write_record([
        "data",
        "dia_semana",
        "horario",
        "sala",
        "predio",
        "curso",
        "status",
    ])?;

    for row in &export.salas_disponiveis {
        write_row(&mut writer, row, "livre")?;
    }
    for row in &export.salas_ocupadas {
        write_row(&mut writer, row, "ocupada")?;
    }
    writer.flush()?;

    Ok(path)
}

fn write_row(writer: &mut csv::Writer<std::fs::File>, row: &Row, status: &str) -> Result<()> {
    writer.write_record([
        row.data.as_str(),
        row.dia_semana.as_str(),
        row.horario.as_str(),
        row.sala.as_str(),
        row.predio.as_str(),
        row.curso.as_deref().unwrap_or(""),
        status,
    ])?;
    Ok(())
}
