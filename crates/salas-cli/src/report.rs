//! Chat-paste-ready text rendering of engine results.
//!
//! Output keeps the Portuguese labels and emoji markers the tool's users
//! know from the original WhatsApp-oriented reports.

use chrono::NaiveDate;
use std::fmt::Write;

use salas_engine::availability::{AvailabilityResult, SlotAvailability};
use salas_engine::compare::ConflictReport;
use salas_engine::suggest::Suggestion;
use salas_engine::types::{ClassSession, TimeWindow};

const SEP: &str = "══════════════════════════════════════════════════════════";
const THIN: &str = "──────────────────────────────────────────────────────────";

fn br_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Every session of one course, numbered, followed by a day summary.
pub fn course_sessions(name: &str, sessions: &[&ClassSession], date: NaiveDate) -> String {
    let mut out = String::new();

    if sessions.is_empty() {
        let _ = writeln!(out, "Nenhuma aula encontrada para \"{name}\".");
        return out;
    }

    let _ = writeln!(out, "📋 *AULAS - {}*", br_date(date));
    let _ = writeln!(out, "{SEP}");
    let _ = writeln!(out);

    for (idx, session) in sessions.iter().enumerate() {
        let _ = writeln!(out, "{}. *{}*", idx + 1, session.course);
        let _ = writeln!(out, "   📍 Sala: {}", session.room);
        let _ = writeln!(out, "   🏢 Prédio: {}", session.building);
        if !session.teacher.is_empty() {
            let _ = writeln!(out, "   👤 Professor: {}", session.teacher);
        }
        if let Some(title) = &session.title {
            let _ = writeln!(out, "   📖 Aula: {title}");
        }
        let _ = writeln!(out, "   ⏰ Horário: {}", session.window());
        let _ = writeln!(out);
    }

    let teachers: std::collections::BTreeSet<&str> = sessions
        .iter()
        .filter(|s| !s.teacher.is_empty())
        .map(|s| s.teacher.as_str())
        .collect();
    let first = sessions.iter().map(|s| s.start).min();
    let last = sessions.iter().map(|s| s.end).max();

    let _ = writeln!(out, "📊 *RESUMO DO DIA*");
    let _ = writeln!(out, "{THIN}");
    let _ = writeln!(out, "Total de aulas: {}", sessions.len());
    let _ = writeln!(out, "Professores envolvidos: {}", teachers.len());
    if let (Some(first), Some(last)) = (first, last) {
        let _ = writeln!(out, "Primeiro horário: {}", first.format("%H:%M"));
        let _ = writeln!(out, "Último horário: {}", last.format("%H:%M"));
    }

    out
}

/// Per-room free windows inside the queried window.
pub fn availability(result: &AvailabilityResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📊 *SALAS LIVRES - {}*", result.window);
    let _ = writeln!(out, "{SEP}");

    if result.rooms.is_empty() {
        let _ = writeln!(out, "Nenhuma sala conhecida no horário consultado.");
        return out;
    }

    for (room, avail) in &result.rooms {
        let _ = writeln!(out, "Sala {room} ({})", avail.building);
        if avail.free.is_empty() {
            let _ = writeln!(out, "   🔴 sem janelas livres");
        } else {
            for window in &avail.free {
                let _ = writeln!(out, "   🟢 {window}");
            }
        }
    }

    for warning in &result.warnings {
        let _ = writeln!(out, "⚠️  {warning}");
    }

    out
}

/// Conflict report: overlap entries, common free windows, unresolved names.
pub fn conflicts(report: &ConflictReport, date: NaiveDate) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📋 *COMPARAÇÃO DE HORÁRIOS - {}*", br_date(date));
    let _ = writeln!(out, "{SEP}");
    let _ = writeln!(out);

    for course in &report.courses {
        let _ = writeln!(
            out,
            "🎓 {} ({} aula{})",
            course.course,
            course.sessions.len(),
            if course.sessions.len() == 1 { "" } else { "s" }
        );
    }
    let _ = writeln!(out);

    if report.conflicts.is_empty() {
        let _ = writeln!(out, "✅ Nenhum conflito de horário entre os cursos.");
    } else {
        let _ = writeln!(out, "🚨 *CONFLITOS DETECTADOS*");
        let _ = writeln!(out, "{THIN}");
        for entry in &report.conflicts {
            let _ = writeln!(out, "⏰ *{}* ({})", entry.window, br_date(entry.date));
            for session in &entry.sessions {
                let _ = writeln!(
                    out,
                    "   • {} — Sala {} ({})",
                    session.course, session.room, session.building
                );
            }
        }
    }
    let _ = writeln!(out);

    if !report.common_free.is_empty() {
        let _ = writeln!(out, "🟢 *HORÁRIOS LIVRES EM COMUM*");
        let _ = writeln!(out, "{THIN}");
        for day in &report.common_free {
            let _ = writeln!(out, "{}:", br_date(day.date));
            for window in &day.free {
                let _ = writeln!(out, "   {window}");
            }
        }
        let _ = writeln!(out);
    }

    for name in &report.unresolved {
        let _ = writeln!(out, "⚠️  Curso não encontrado: {name}");
    }

    out
}

/// Alternative-room suggestions, nearest building first.
pub fn suggestions(reference: &str, window: TimeWindow, suggestions: &[Suggestion]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "💡 *ALTERNATIVAS PARA A SALA {reference} - {window}*");
    let _ = writeln!(out, "{SEP}");

    if suggestions.is_empty() {
        let _ = writeln!(out, "Nenhuma sala totalmente livre neste horário.");
        return out;
    }

    for suggestion in suggestions {
        let marker = if suggestion.distance_rank == 0 {
            "mesmo prédio"
        } else {
            "outro prédio"
        };
        let _ = writeln!(
            out,
            "   Sala {} ({}) está livre — {marker}",
            suggestion.room, suggestion.building
        );
    }

    out
}

/// The per-slot availability table.
pub fn slot_table(slots: &[SlotAvailability], date: NaiveDate) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📊 *DISPONIBILIDADE POR HORÁRIO - {}*", br_date(date));
    let _ = writeln!(out, "{SEP}");

    if slots.is_empty() {
        let _ = writeln!(out, "Nenhum horário encontrado no calendário.");
        return out;
    }

    for slot in slots {
        if slot.free.is_empty() {
            let _ = writeln!(out, "🔴 *{}*", slot.window);
            let _ = writeln!(out, "   Todas as salas ocupadas");
        } else {
            let _ = writeln!(out, "🟢 *{}*", slot.window);
            let _ = writeln!(
                out,
                "   {} salas disponíveis | {} ocupadas",
                slot.free.len(),
                slot.occupied.len()
            );
        }
    }

    out
}
