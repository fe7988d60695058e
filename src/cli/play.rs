//! Line-driven front ends for the games. Both loops read commands from any
//! `BufRead` and write prompts to any `Write`; end of input quits.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use crate::application::games::budget::{BudgetGame, BudgetPhase, LifeEventChoice};
use crate::application::games::escape_room::{format_time, Attempt, EscapePhase, EscapeRoom};
use crate::domain::values::budget_category::BudgetCategory;
use crate::domain::values::budget_profile::{BudgetProfile, LifeEventKind, LEVEL_COUNT};

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}> ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim().to_string();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Ok(None);
    }
    Ok(Some(line))
}

pub fn play_budget<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    let mut game = BudgetGame::new();
    let mut level_started = Instant::now();
    writeln!(out, "Budget Simulator. Type 'quit' to leave.")?;

    loop {
        match game.phase() {
            BudgetPhase::Profile => {
                writeln!(out, "\nChoose your profile:")?;
                for (i, p) in BudgetProfile::ALL.iter().enumerate() {
                    writeln!(out, "  {}. {}", i + 1, p.name())?;
                }
                let Some(line) = prompt(input, out, "profile")? else { break };
                let profile = line
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| BudgetProfile::ALL.get(i).copied())
                    .map(Ok)
                    .unwrap_or_else(|| line.parse::<BudgetProfile>());
                match profile {
                    Ok(p) => report(out, game.choose_profile(p))?,
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            BudgetPhase::Income => {
                let presets = game.profile().map(|p| p.default_incomes()).unwrap_or_default();
                writeln!(out, "\nMonthly income: pick a preset or type an amount ('back' to change profile)")?;
                for (i, amount) in presets.iter().enumerate() {
                    writeln!(out, "  {}. ${amount}", i + 1)?;
                }
                let Some(line) = prompt(input, out, "income")? else { break };
                if line.eq_ignore_ascii_case("back") {
                    report(out, game.back_to_profile())?;
                    continue;
                }
                let amount = match line.trim_start_matches('$').parse::<u64>() {
                    Ok(n @ 1..=4) => presets[n as usize - 1],
                    Ok(n) => n,
                    Err(_) => {
                        writeln!(out, "Enter a whole dollar amount")?;
                        continue;
                    }
                };
                report(out, game.choose_income(amount))?;
                game.take_feedback();
            }
            BudgetPhase::Intro => {
                writeln!(out, "\nLevel {} of {LEVEL_COUNT}. Income ${}.", game.level(), game.income())?;
                writeln!(out, "Minimum allocations:")?;
                for (category, share) in game.requirements() {
                    writeln!(out, "  {:<18} {:>3.0}%", category.label(), share * 100.0)?;
                }
                if prompt(input, out, "press enter to start")?.is_none() {
                    break;
                }
                report(out, game.start_level())?;
                level_started = Instant::now();
                writeln!(out, "Commands: <category> <amount>, status, submit")?;
            }
            BudgetPhase::Playing => {
                if game.life_event_due(level_started.elapsed()) {
                    if let Ok(event) = game.trigger_life_event() {
                        writeln!(out, "\nLife event: {} ({}) ${}", event.title, event.description, event.amount)?;
                        match event.kind {
                            LifeEventKind::Expense { .. } => {
                                writeln!(out, "  1. Use savings\n  2. Add to expenses")?
                            }
                            LifeEventKind::Income => writeln!(out, "  1. Accept")?,
                        }
                    }
                }
                let pending = game.pending_life_event().map(|e| e.kind);
                let Some(line) = prompt(input, out, "budget")? else { break };

                if let Some(kind) = pending {
                    let choice = match (kind, line.as_str()) {
                        (LifeEventKind::Income, _) => Some(LifeEventChoice::AcceptIncome),
                        (_, "1") => Some(LifeEventChoice::UseSavings),
                        (_, "2") => Some(LifeEventChoice::AddToExpenses),
                        _ => None,
                    };
                    match choice {
                        Some(c) => report(out, game.resolve_life_event(c))?,
                        None => writeln!(out, "Choose 1 or 2")?,
                    }
                    if let Some(msg) = game.take_feedback() {
                        writeln!(out, "{msg}")?;
                    }
                    continue;
                }

                let mut words = line.split_whitespace();
                let mut refused: Option<String> = None;
                match (words.next(), words.next()) {
                    (Some("status"), _) => print_allocations(out, &game)?,
                    (Some("submit"), _) => match game.submit() {
                        Ok(result) => {
                            writeln!(out, "\nLevel {} score: {}", result.level, result.score)?;
                            for s in &result.shortfalls {
                                writeln!(
                                    out,
                                    "  {} needs at least ${:.0} ({:.0}%)",
                                    s.category.label(),
                                    s.required,
                                    s.min_share * 100.0
                                )?;
                            }
                            if result.entertainment_bonus {
                                writeln!(out, "  Entertainment kept under 10%: +10")?;
                            }
                        }
                        Err(e) => refused = Some(e.to_string()),
                    },
                    (Some(cat), Some(amount)) => {
                        let parsed = cat
                            .parse::<BudgetCategory>()
                            .and_then(|c| {
                                amount
                                    .trim_start_matches('$')
                                    .parse::<u64>()
                                    .map(|a| (c, a))
                                    .map_err(|_| format!("Invalid amount: {amount}"))
                            });
                        match parsed {
                            Ok((c, a)) => refused = game.allocate(c, a).err().map(|e| e.to_string()),
                            Err(e) => refused = Some(e),
                        }
                    }
                    _ => writeln!(out, "Commands: <category> <amount>, status, submit")?,
                }
                // Refusals also land in the feedback slot; show each message once.
                if let Some(msg) = game.take_feedback().or(refused) {
                    writeln!(out, "{msg}")?;
                }
            }
            BudgetPhase::Result => {
                let passed = game.last_result().is_some_and(|r| r.passed);
                writeln!(out, "Total so far: {}", game.total_score())?;
                let hint = if passed { "next, retry" } else { "retry" };
                let Some(line) = prompt(input, out, hint)? else { break };
                match line.as_str() {
                    "next" => report(out, game.next_level())?,
                    "retry" => {
                        report(out, game.retry_level())?;
                        level_started = Instant::now();
                    }
                    _ => writeln!(out, "Type {hint}")?,
                }
            }
            BudgetPhase::Final => {
                writeln!(out, "\nFinal score: {} ({})", game.total_score(), game.rank().title())?;
                let Some(line) = prompt(input, out, "play again? (y/n)")? else { break };
                if line.eq_ignore_ascii_case("y") {
                    game.reset();
                } else {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn print_allocations<W: Write>(out: &mut W, game: &BudgetGame) -> io::Result<()> {
    for category in BudgetCategory::ALL {
        writeln!(
            out,
            "  {:<18} ${:>6} {:>5.1}%",
            category.label(),
            game.allocation(category),
            game.share_pct(category)
        )?;
    }
    writeln!(out, "  Remaining: ${}", game.remaining())
}

fn report<W: Write, E: std::fmt::Display>(out: &mut W, result: Result<(), E>) -> io::Result<()> {
    if let Err(e) = result {
        writeln!(out, "{e}")?;
    }
    Ok(())
}

/// Whole seconds elapsed since the previous lap; fractions carry over.
struct Stopwatch {
    last: Instant,
    carry: Duration,
}

impl Stopwatch {
    fn new() -> Self {
        Self {
            last: Instant::now(),
            carry: Duration::ZERO,
        }
    }

    fn lap(&mut self) -> u32 {
        let now = Instant::now();
        let total = self.carry + (now - self.last);
        self.last = now;
        let secs = total.as_secs();
        self.carry = total - Duration::from_secs(secs);
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}

pub fn play_escape<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    let mut room = EscapeRoom::new();
    let mut clock = Stopwatch::new();
    writeln!(out, "Compound Interest Escape Room. Type 'quit' to leave.")?;
    writeln!(out, "Solve each vault's puzzle before the timer runs out.")?;
    if prompt(input, out, "press enter to start")?.is_none() {
        return Ok(());
    }
    report(out, room.start())?;
    clock.lap();

    loop {
        match room.phase() {
            EscapePhase::Briefing => report(out, room.start())?,
            EscapePhase::Solving => {
                writeln!(
                    out,
                    "\nVault {}/{}  time left {}",
                    room.level(),
                    room.level_count(),
                    format_time(room.seconds_remaining())
                )?;
                writeln!(out, "{}", room.puzzle().question)?;
                if let Some(hint) = room.hint() {
                    writeln!(out, "Hint: {hint}")?;
                }
                if let Some(steps) = room.steps() {
                    for step in steps {
                        writeln!(out, "  {step}")?;
                    }
                }
                let Some(line) = prompt(input, out, "answer (or hint/steps)")? else { break };
                room.tick(clock.lap());
                if room.phase() == EscapePhase::TimedOut {
                    continue;
                }
                match line.as_str() {
                    "hint" => report(out, room.toggle_hint())?,
                    "steps" => report(out, room.toggle_steps())?,
                    answer => match room.submit(answer) {
                        Ok(Attempt::Invalid) => writeln!(out, "Please enter a valid number")?,
                        Ok(Attempt::Wrong) => writeln!(out, "Incorrect. Try again!")?,
                        Ok(Attempt::Unlocked { score }) => {
                            let digits: String =
                                room.lock_digits().iter().map(|d| d.to_string()).collect();
                            writeln!(out, "Vault unlocked! Code {digits}. Score {score}")?;
                            if room.hint_used() {
                                writeln!(out, "  (hint used)")?;
                            }
                            for (year, balance) in room.puzzle().yearly_balances().iter().enumerate() {
                                writeln!(out, "  Year {year}: ${balance:.2}")?;
                            }
                        }
                        Err(e) => writeln!(out, "{e}")?,
                    },
                }
            }
            EscapePhase::Escaped => {
                if let Some(score) = room.level_score() {
                    writeln!(out, "Vault {} score: {score}  total: {}", room.level(), room.total_score())?;
                }
                if room.is_last_level() {
                    writeln!(out, "\nAll vaults unlocked! Total score {}", room.total_score())?;
                    let Some(line) = prompt(input, out, "play again? (y/n)")? else { break };
                    if !line.eq_ignore_ascii_case("y") {
                        break;
                    }
                    room.reset();
                } else {
                    if prompt(input, out, "press enter for the next vault")?.is_none() {
                        break;
                    }
                    report(out, room.next_level())?;
                }
                clock.lap();
            }
            EscapePhase::TimedOut => {
                writeln!(out, "\nTime's up! The vault stays locked.")?;
                let Some(line) = prompt(input, out, "try again? (y/n)")? else { break };
                if !line.eq_ignore_ascii_case("y") {
                    break;
                }
                room.reset();
                clock.lap();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_budget(script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        play_budget(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn run_escape(script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        play_escape(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_budget_rejects_incomplete_submit() {
        let out = run_budget("student\n2\n\nhousing 400\nsubmit\nquit\n");
        assert!(out.contains("Level 1 of 3. Income $1000."));
        assert!(out.contains("Great! Housing/Rent is well allocated!"));
        assert!(out.contains("You must allocate all your income!"));
    }

    #[test]
    fn test_budget_scores_full_allocation() {
        let script = "1\n1000\n\nhousing 400\nfood 200\ntransportation 100\nsavings 200\nentertainment 50\nother 50\nsubmit\nquit\n";
        let out = run_budget(script);
        assert!(out.contains("Level 1 score: 110"), "{out}");
    }

    #[test]
    fn test_escape_wrong_then_right() {
        let out = run_escape("\nabc\n1000\n$1157.63\nquit\n");
        assert!(out.contains("Please enter a valid number"));
        assert!(out.contains("Incorrect. Try again!"));
        assert!(out.contains("Vault unlocked! Code 115763."));
        assert!(out.contains("  Year 2: $1102.50"));
        assert!(out.contains("  Year 3: $1157.63"));
        assert!(out.contains("Vault 1 score:"));
    }

    #[test]
    fn test_stopwatch_carries_fractions() {
        let mut sw = Stopwatch::new();
        sw.last -= Duration::from_millis(1500);
        assert_eq!(sw.lap(), 1);
        assert!(sw.carry >= Duration::from_millis(500));
    }
}
