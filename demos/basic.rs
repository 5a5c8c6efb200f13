use ledger_calc::{format_number, Calculator};

fn main() {
    let mut calc = Calculator::new();
    println!("{}", format_number(calc.add(5.0, 3.0)));
    println!("{}", format_number(calc.multiply(4.0, 7.0)));
    println!("{:?}", calc.get_history());
}
