use countbench::bench::CounterBench;
use countbench::dut::{DataOut, ResetTiming};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn loads_arbitrary_values_and_keeps_counting() {
    init_logging();
    let mut bench = CounterBench::new(ResetTiming::Synchronous);
    bench.reset_sequence().expect("reset sequence");

    for value in [42u8, 100, 255, 0, 128] {
        bench.set_ui_in(value);
        bench.set_load_active(true);
        bench.clock_cycles(1).expect("load cycle");
        assert_eq!(bench.uo_out(), DataOut::Driven(value), "load {value}");

        // Counting resumes from the loaded value, wrapping at 255.
        bench.set_load_active(false);
        bench.clock_cycles(1).expect("count cycle");
        assert_eq!(
            bench.uo_out(),
            DataOut::Driven(value.wrapping_add(1)),
            "count after loading {value}"
        );
    }
}

#[test]
fn load_held_across_edges_reloads_every_edge() {
    init_logging();
    let mut bench = CounterBench::new(ResetTiming::Synchronous);
    bench.reset_sequence().expect("reset sequence");

    bench.set_ui_in(17);
    bench.set_load_active(true);
    bench.clock_cycles(3).expect("held load");
    assert_eq!(
        bench.uo_out(),
        DataOut::Driven(17),
        "value is reloaded, not incremented, while load stays asserted"
    );
}

#[test]
fn reset_wins_over_simultaneous_load() {
    init_logging();
    for timing in [ResetTiming::Synchronous, ResetTiming::Asynchronous] {
        let mut bench = CounterBench::new(timing);
        bench.reset_sequence().expect("reset sequence");

        bench.set_ui_in(0xEE);
        bench.set_load_active(true);
        bench.set_rst_n(countbench::dut::Level::Low);
        bench.clock_cycles(1).expect("conflicting cycle");
        assert_eq!(
            bench.uo_out(),
            DataOut::Driven(0),
            "{timing:?}: reset has priority over load"
        );
    }
}
