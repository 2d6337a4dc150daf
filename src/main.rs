use growable_array::handle;

fn main() {
    pretty_env_logger::init();

    let mut array = handle::create::<i32>(10);

    println!("size: {}, capacity: {}", handle::length(&array), handle::capacity(&array));

    for i in 0..15 {
        handle::append(&mut array, i);
    }

    println!("size: {}, capacity: {}", handle::length(&array), handle::capacity(&array));

    for i in 0..handle::length(&array) {
        println!("array[{i}] = {}", handle::get(&array, i, -1));
        handle::set(&mut array, i, i as i32 * 2);
    }

    println!("array[99] = {}", handle::get(&array, 99, -1));

    if handle::set(&mut array, 99, 99) {
        println!("array[99] = {}", handle::get(&array, 99, -1));
    } else {
        println!("Failed to set array[99]");
    }

    println!(
        "Before resize - size: {}, capacity: {}",
        handle::length(&array),
        handle::capacity(&array)
    );
    handle::resize(&mut array, 5);
    println!(
        "After resize - size: {}, capacity: {}",
        handle::length(&array),
        handle::capacity(&array)
    );

    for i in 0..20 {
        println!("array[{i}] = {}", handle::get(&array, i, -1));
    }

    handle::destroy(&mut array);
    println!("destroyed: {}", array.is_none());
}
