//! `umacard show` - print the active biography and race table.

use std::path::Path;

use anyhow::{Context, Result};
use umacard_document::load_document;
use umacard_editor::ProfileSession;
use umacard_schemas::Mode;

fn or_dash(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}

pub fn execute(file: &Path) -> Result<()> {
    let document =
        load_document(file).with_context(|| format!("failed to load {}", file.display()))?;
    let session = ProfileSession::with_document(document);
    let doc = session.document();

    match doc.mode {
        Mode::Fictional => {
            let record = &doc.fictional;
            println!(
                "{} {}",
                or_dash(&record.horse_name),
                or_dash(&record.horse_name_en)
            );
            println!("父: {}", or_dash(&record.father));
            println!("母: {} (母父: {})", or_dash(&record.mother), or_dash(&record.bms));
            println!("性齢: {}", or_dash(&record.sex_age));
            let affiliation = [record.affiliation_select.as_str(), record.affiliation_text.as_str()]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            println!("所属: {}", or_dash(&affiliation));
            println!("馬主: {}", or_dash(&record.owner));
            println!("生産者: {}", or_dash(&record.breeder));
            println!("通算成績: {}", or_dash(&record.total_results));
            println!("総獲得賞金: {}", or_dash(&record.total_prize));
            println!("主な勝ち鞍: {}", or_dash(&record.main_win));
            println!("生年月日: {}", or_dash(&record.birthday));
        }
        Mode::Original => {
            let record = &doc.original;
            println!("{} {}", or_dash(&record.name), or_dash(&record.name_en));
            println!("耳飾り: {}", or_dash(&record.ear));
            println!("学年: {}", or_dash(&record.grade));
            let dorm = [record.dorm_select.as_str(), record.dorm_text.as_str()]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            println!("所属寮: {}", or_dash(&dorm));
            println!("通算成績: {}", or_dash(&record.total_results));
            println!("累計ファン数: {}", or_dash(&record.total_fans));
            println!("主な勝ち鞍: {}", or_dash(&record.main_win));
            println!("生年月日: {}", or_dash(&record.birthday));
        }
    }

    if !session.races().is_empty() {
        println!();
        for (index, race) in session.races().iter().enumerate() {
            let grade = if race.grade.is_empty() {
                String::new()
            } else {
                format!(" [{}]", race.grade)
            };
            println!(
                "{:>3}: {} {} {}{} 人気{} 着順{}",
                index,
                or_dash(&race.date),
                or_dash(&race.course),
                or_dash(&race.name),
                grade,
                or_dash(&race.pop),
                or_dash(&race.rank),
            );
        }
    }

    Ok(())
}
