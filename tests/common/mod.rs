use hackvm::mach::{Event, Runtime};

#[allow(dead_code)]
pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

#[allow(dead_code)]
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::Exited => {
                break;
            }
            Event::Fault(error) => {
                s.push_str(&format!("?{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(bytes) => {
                s.push_str(&String::from_utf8_lossy(bytes));
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

/// Source text that leaves `n` on the stack, built from single digits.
#[allow(dead_code)]
pub fn number(n: i64) -> String {
    if n < 0 {
        return format!("0{}-", number(-n));
    }
    if n < 10 {
        return n.to_string();
    }
    format!("{}9*{}+", number(n / 9), n % 9)
}
